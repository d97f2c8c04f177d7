/// Renders a minute count as a "1y 2d 3h 4m" style string for presentation
/// layers showing accumulated playtime or time since last seen.
pub fn format_minutes(total_minutes: i64) -> String {
    let mut minutes = total_minutes.max(0);

    let years = minutes / (365 * 60 * 24);
    minutes %= 365 * 60 * 24;
    let days = minutes / (60 * 24);
    minutes %= 60 * 24;
    let hours = minutes / 60;
    minutes %= 60;

    if years > 0 {
        format!("{}y {}d {}h {}m", years, days, hours, minutes)
    } else if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
