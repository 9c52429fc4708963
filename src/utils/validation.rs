//! Input validation utilities

use chrono::{DateTime, Utc};

/// Validate that a season's end date falls after its start date
pub fn validate_season_dates(
    start_date: &DateTime<Utc>,
    end_date: &DateTime<Utc>,
) -> Result<(), &'static str> {
    if end_date <= start_date {
        return Err("End date must be after start date");
    }
    Ok(())
}

/// Validate a team livery colour as a hex code, e.g. `#1e88e5`
pub fn validate_team_color(color: &str) -> Result<(), &'static str> {
    let Some(hex) = color.strip_prefix('#') else {
        return Err("Team color must start with '#'");
    };
    if hex.len() != 3 && hex.len() != 6 {
        return Err("Team color must be a 3 or 6 digit hex code");
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Team color may only contain hex digits");
    }
    Ok(())
}
