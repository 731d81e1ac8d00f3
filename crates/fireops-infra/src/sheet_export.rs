//! Assignment sheet export (CSV)

use std::fs::File;
use std::io::Write;
use std::path::Path;

use fireops_domain::model::{AssignmentMap, Vehicle};
use fireops_types::Result;

const HEADER: [&str; 5] = ["vehicle_id", "vehicle_number", "person_id", "person_name", "role"];

/// Write one row per crew member, vehicles in roster order
pub fn write_assignment_csv<W: Write>(
    writer: W,
    map: &AssignmentMap,
    vehicles: &[Vehicle],
) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    let mut rows = 0;
    for vehicle in vehicles {
        for person in map.crew(&vehicle.id) {
            csv_writer.write_record([
                vehicle.id.as_str(),
                vehicle.number.as_str(),
                person.id.as_str(),
                person.name.as_str(),
                person.role.label(),
            ])?;
            rows += 1;
        }
    }
    csv_writer.flush()?;
    Ok(rows)
}

pub fn export_assignment_csv(
    path: &Path,
    map: &AssignmentMap,
    vehicles: &[Vehicle],
) -> Result<usize> {
    let file = File::create(path)?;
    let rows = write_assignment_csv(file, map, vehicles)?;
    tracing::info!(path = %path.display(), rows, "exported assignment sheet");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station_roster::station_roster;
    use fireops_domain::service::auto_assign;

    #[test]
    fn test_write_assignment_csv() {
        let roster = station_roster();
        let map = auto_assign(roster.people(), roster.vehicles());

        let mut buf = Vec::new();
        let rows = write_assignment_csv(&mut buf, &map, roster.vehicles()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, 5);
        assert_eq!(lines[0], "vehicle_id,vehicle_number,person_id,person_name,role");
        assert_eq!(lines[1], "1,001,2,Mohammed Abdullah Al-Saad,driver");
        assert_eq!(lines[5], "2,002,7,Nasser Abdullah Al-Harbi,firefighter");
    }

    #[test]
    fn test_empty_map_writes_header_only() {
        let roster = station_roster();
        let mut buf = Vec::new();
        let rows =
            write_assignment_csv(&mut buf, &AssignmentMap::new(), roster.vehicles()).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        let roster = station_roster();
        let map = auto_assign(roster.people(), roster.vehicles());

        export_assignment_csv(&path, &map, roster.vehicles()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Fahd Salem Al-Ghamdi"));
    }
}
