//! `vitae themes`: list layouts and sidebar colours.

use serde_json::json;

use vitae_core::domain::{SidebarColor, Theme};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let colors: Vec<_> = SidebarColor::ALL
            .iter()
            .map(|c| json!({ "name": c.as_str(), "hex": c.hex() }))
            .collect();
        output.json(&json!({ "themes": Theme::NAMES, "sidebar_colors": colors }))?;
        return Ok(());
    }

    output.header("Themes:")?;
    for name in Theme::NAMES {
        output.print(&format!("  {name}"))?;
    }
    output.header("Sidebar colours:")?;
    for color in SidebarColor::ALL {
        output.print(&format!("  {:<6} {}", color.as_str(), color.hex()))?;
    }
    Ok(())
}
