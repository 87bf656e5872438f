use comfy_table::{ContentArrangement, Table};
use eb_core::{LOCATIONS, neighbors};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Position", "Roads to"]);

    for location in &LOCATIONS {
        let roads = neighbors(location.id)
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            location.id.to_string(),
            location.name.to_string(),
            format!("({}, {})", location.x, location.y),
            roads,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} locations", LOCATIONS.len());

    Ok(())
}
