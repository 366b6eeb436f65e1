use owo_colors::OwoColorize;
use serde::Serialize;
use valet_runtime::ParkingRecord;

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct RecordListView<'a> {
    pub total: usize,
    pub shown: usize,
    pub records: &'a [ParkingRecord],
}

/// Fixed-width listing: id, plate, entry time.
pub fn render_table(records: &[ParkingRecord], color: bool) -> String {
    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);
    let plate_width = records
        .iter()
        .map(|r| r.plate_number.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    let header = format!(
        "{:>id_w$}  {:<plate_w$}  {}",
        "ID",
        "Số xe",
        "Ngày tạo",
        id_w = id_width,
        plate_w = plate_width
    );

    let mut out = String::new();
    if color {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{:>id_w$}  {:<plate_w$}  {}\n",
            record.id,
            record.plate_number,
            record.created_at.format(DISPLAY_DATE_FORMAT),
            id_w = id_width,
            plate_w = plate_width
        ));
    }

    out
}
