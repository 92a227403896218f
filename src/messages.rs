use crate::models::{StopResponse, TotalResponse};

const MINUTES_PER_TREE: f64 = 25.0;
const MAX_FOREST_TREES: usize = 10;

pub const STATUS_GROWING: &str = "Growing...";
pub const STATUS_READY: &str = "Ready to focus";
pub const RESET_DONE: &str = "🔄 Forest cleared!\n\nReady for a fresh start.";

pub fn status_text(running: bool) -> &'static str {
    if running { STATUS_GROWING } else { STATUS_READY }
}

pub fn status_alert(running: bool, elapsed_text: &str) -> String {
    if running {
        format!("🌱 Your tree is growing!\n\nTime: {elapsed_text}")
    } else {
        "🌲 Your tree is resting.\nStart a new session to grow!".to_string()
    }
}

pub fn harvest(stop: &StopResponse) -> String {
    let minutes = stop.duration_minutes.unwrap_or(0.0);
    let emoji = if minutes >= 1.0 { "🌳" } else { "🌱" };
    let comment = stop.comment.as_deref().unwrap_or("");
    format!("{emoji} Tree Harvested!\n\n{minutes} minutes\n{comment}")
}

pub fn forest(total_minutes: f64) -> String {
    let trees = (total_minutes / MINUTES_PER_TREE).floor().max(0.0) as usize;
    let shown = trees.min(MAX_FOREST_TREES);
    if shown == 0 {
        "🌱".to_string()
    } else {
        "🌲".repeat(shown)
    }
}

pub fn total_summary(total: &TotalResponse) -> String {
    if total.total_minutes > 0.0 {
        format!(
            "🌲 Your Forest 🌲\n\nTotal focus time:\n{} minutes\n\n{}",
            total.total_minutes,
            forest(total.total_minutes)
        )
    } else {
        "🌱 Your forest is empty.\nStart planting trees!".to_string()
    }
}

pub fn error_line(message: &str) -> String {
    format!("Error: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forest_is_one_tree_per_25_minutes_capped_at_ten() {
        assert_eq!(forest(0.0), "🌱");
        assert_eq!(forest(24.0), "🌱");
        assert_eq!(forest(25.0), "🌲");
        assert_eq!(forest(74.0), "🌲🌲");
        assert_eq!(forest(10_000.0), "🌲".repeat(10));
    }

    #[test]
    fn harvest_picks_emoji_by_duration() {
        let short = StopResponse {
            duration_minutes: Some(0.0),
            comment: Some("Too short".into()),
            error: None,
        };
        assert_eq!(harvest(&short), "🌱 Tree Harvested!\n\n0 minutes\nToo short");

        let long = StopResponse {
            duration_minutes: Some(42.0),
            comment: Some("Nice".into()),
            error: None,
        };
        assert_eq!(harvest(&long), "🌳 Tree Harvested!\n\n42 minutes\nNice");
    }

    #[test]
    fn fractional_minutes_render_like_numbers() {
        let stop = StopResponse {
            duration_minutes: Some(2.5),
            comment: Some(String::new()),
            error: None,
        };
        assert!(harvest(&stop).contains("2.5 minutes"));
    }

    #[test]
    fn harvest_without_comment_ends_on_blank_line() {
        let stop = StopResponse {
            duration_minutes: Some(3.0),
            comment: None,
            error: None,
        };
        assert_eq!(harvest(&stop), "🌳 Tree Harvested!\n\n3 minutes\n");
    }

    #[test]
    fn total_summary_handles_empty_forest() {
        let empty = TotalResponse { total_minutes: 0.0 };
        assert_eq!(
            total_summary(&empty),
            "🌱 Your forest is empty.\nStart planting trees!"
        );

        let some = TotalResponse { total_minutes: 60.0 };
        assert_eq!(
            total_summary(&some),
            "🌲 Your Forest 🌲\n\nTotal focus time:\n60 minutes\n\n🌲🌲"
        );
    }

    #[test]
    fn status_alert_mentions_elapsed_only_when_running() {
        assert_eq!(
            status_alert(true, "3:07"),
            "🌱 Your tree is growing!\n\nTime: 3:07"
        );
        assert!(status_alert(false, "3:07").starts_with("🌲 Your tree is resting."));
    }
}
