use valet_runtime::{ParkingRecord, TicketSettings};

const TICKET_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
const RULE_WIDTH: usize = 32;

/// Printable ticket for one record.
pub struct Ticket<'a> {
    settings: &'a TicketSettings,
    record: &'a ParkingRecord,
}

impl<'a> Ticket<'a> {
    pub fn new(settings: &'a TicketSettings, record: &'a ParkingRecord) -> Self {
        Self { settings, record }
    }

    pub fn entry_time(&self) -> String {
        self.record.created_at.format(TICKET_DATE_FORMAT).to_string()
    }

    pub fn render_text(&self) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        let mut out = String::new();
        out.push_str(&heavy);
        out.push('\n');
        out.push_str(&center(&self.settings.title, RULE_WIDTH));
        out.push('\n');
        out.push_str(&light);
        out.push('\n');
        out.push_str(&self.settings.subtitle);
        out.push('\n');
        out.push_str(&format!("* SỐ XE : {}\n", self.record.plate_number));
        out.push_str(&format!("* NGÀY : {}\n", self.entry_time()));
        out.push_str(&light);
        out.push('\n');
        out.push_str(&format!("#{}\n", self.record.id));
        out.push_str(&heavy);
        out.push('\n');
        out
    }

    /// Standalone HTML page sized for a receipt printer.
    pub fn render_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
    table {{ margin-bottom: 10px; color: #000; border: 2px solid #000; font-size: 12px; width: 100%; page-break-inside: avoid; }}
    td {{ border: 1px solid #000; padding: 5px; }}
</style>
</head>
<body>
<table>
    <tr style="font-size: 20px; text-align: center;">
        <td>{title}</td>
    </tr>
    <tr style="font-size: 15px;">
        <td>
            {subtitle}<br/>
            * SỐ XE : {plate}<br/>
            * NGÀY : {date}
        </td>
    </tr>
</table>
</body>
</html>
"#,
            title = escape_html(&self.settings.title),
            subtitle = escape_html(&self.settings.subtitle),
            plate = escape_html(&self.record.plate_number),
            date = self.entry_time(),
        )
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn record(plate: &str) -> ParkingRecord {
        ParkingRecord {
            id: 42,
            plate_number: plate.to_string(),
            created_at: NaiveDateTime::parse_from_str("2024-03-09 08:05:07", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        }
    }

    #[test]
    fn test_text_ticket_lines() {
        let settings = TicketSettings::default();
        let record = record("ABC-123");

        let text = Ticket::new(&settings, &record).render_text();

        assert!(text.contains("GAMING PARKING"));
        assert!(text.contains("GIỮ XE MIỄN PHÍ"));
        assert!(text.contains("* SỐ XE : ABC-123\n"));
        assert!(text.contains("* NGÀY : 09/03/2024 08:05:07\n"));
        assert!(text.contains("#42\n"));
    }

    #[test]
    fn test_html_ticket_escapes_plate() {
        let settings = TicketSettings::default();
        let record = record("<b>X&Y</b>");

        let html = Ticket::new(&settings, &record).render_html();

        assert!(html.contains("* SỐ XE : &lt;b&gt;X&amp;Y&lt;/b&gt;"));
        assert!(!html.contains("<b>X&Y</b>"));
        assert!(html.contains("09/03/2024 08:05:07"));
    }

    #[test]
    fn test_center_pads_short_titles() {
        assert_eq!(center("AB", 6), "  AB");
        assert_eq!(center("TOO LONG", 4), "TOO LONG");
    }
}
