use crate::elapsed::{ElapsedFrame, GrowthStage};
use crate::widget::WidgetView;

pub fn stage_icon(stage: GrowthStage) -> &'static str {
    match stage {
        GrowthStage::Idle => "🌰",
        GrowthStage::Growing => "🌱",
        GrowthStage::Grown => "🌳",
    }
}

/// Single line redrawn on every tick in watch mode.
pub fn render_line(view: &WidgetView, frame: &ElapsedFrame) -> String {
    let mut line = format!(
        "{} {}  {}",
        stage_icon(frame.stage),
        frame.text,
        view.status_text
    );
    if frame.running {
        line.push_str(&format!("  (since {})", view.started_at_text));
    }
    if !view.error_text.is_empty() {
        line.push_str("  ");
        line.push_str(&view.error_text);
    }
    line
}

pub fn render_report(view: &WidgetView, frame: &ElapsedFrame) -> String {
    let mut out = String::new();
    if let Some(modal) = &view.modal {
        out.push_str(modal);
        out.push_str("\n\n");
    }
    out.push_str(&format!("Status:     {}\n", view.status_text));
    out.push_str(&format!("Started at: {}\n", view.started_at_text));
    out.push_str(&format!(
        "Elapsed:    {} {} ({})\n",
        stage_icon(frame.stage),
        frame.text,
        frame.stage.as_str()
    ));
    if !view.error_text.is_empty() {
        out.push_str(&view.error_text);
        out.push('\n');
    }
    out
}
