use std::error::Error;
use std::path::PathBuf;

use hawaii_climate::ClimateStore;

fn main() -> Result<(), Box<dyn Error>> {
    let file_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting dataset: {}", file_path.display());

    // Fails the same way the server would on a missing table or column
    let store = ClimateStore::open(&file_path)?;
    let stats = store.stats()?;

    println!("\n=== DATASET ===");
    println!("  stations:     {}", stats.station_count);
    println!("  measurements: {}", stats.measurement_count);
    println!(
        "  date range:   {} .. {}",
        stats.first_date.as_deref().unwrap_or("-"),
        stats.last_date.as_deref().unwrap_or("-")
    );

    let per_station = store.with_connection(|conn| {
        let mut stmt = conn.prepare(
            "SELECT s.station, COUNT(m.station), MIN(m.date), MAX(m.date), AVG(m.tobs)
             FROM station s LEFT JOIN measurement m ON m.station = s.station
             GROUP BY s.station
             ORDER BY COUNT(m.station) DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<f64>>(4)?,
            ))
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
    })?;

    println!("\nStations (most active first):");
    for (station, count, first, last, avg_tobs) in per_station {
        println!(
            "  {:<12} {:>6} rows  {} .. {}  avg tobs {}",
            station,
            count,
            first.as_deref().unwrap_or("-"),
            last.as_deref().unwrap_or("-"),
            avg_tobs.map_or("-".to_string(), |v| format!("{:.1}", v)),
        );
    }

    let orphans: i64 = store.with_connection(|conn| {
        conn.query_row(
            "SELECT COUNT(*) FROM measurement m
             WHERE NOT EXISTS (SELECT 1 FROM station s WHERE s.station = m.station)",
            [],
            |row| row.get(0),
        )
    })?;
    if orphans > 0 {
        println!("\nWarning: {} measurements reference unknown stations", orphans);
    }

    Ok(())
}
