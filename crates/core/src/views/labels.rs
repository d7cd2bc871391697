use doping_plot_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

const SIDE_LABEL_FONT_SIZE: f64 = 18.0;
const TITLE_FONT_SIZE: f64 = 30.0;
const SUBTITLE_FONT_SIZE: f64 = 20.0;
const SUBTITLE_GAP: f64 = 25.0;

/// Rotated label to the left of the y axis.
pub fn render_side_label(text: &str) -> RenderCommand {
    RenderCommand::DrawText {
        position: Point::new(-160.0, -44.0),
        text: text.to_string(),
        color: ThemeToken::TextPrimary,
        font_size: SIDE_LABEL_FONT_SIZE,
        align: TextAlign::Left,
        rotation: -90.0,
        id: None,
        class: None,
    }
}

/// Title centered in the top margin.
pub fn render_title(text: &str, plot_width: f64, margin_top: f64) -> RenderCommand {
    RenderCommand::DrawText {
        position: Point::new(plot_width / 2.0, -margin_top / 2.0),
        text: text.to_string(),
        color: ThemeToken::TextPrimary,
        font_size: TITLE_FONT_SIZE,
        align: TextAlign::Center,
        rotation: 0.0,
        id: Some("title".into()),
        class: None,
    }
}

/// Subtitle just below the title.
pub fn render_subtitle(text: &str, plot_width: f64, margin_top: f64) -> RenderCommand {
    RenderCommand::DrawText {
        position: Point::new(plot_width / 2.0, -margin_top / 2.0 + SUBTITLE_GAP),
        text: text.to_string(),
        color: ThemeToken::TextSecondary,
        font_size: SUBTITLE_FONT_SIZE,
        align: TextAlign::Center,
        rotation: 0.0,
        id: Some("subtitle".into()),
        class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_sits_in_top_margin() {
        let RenderCommand::DrawText { position, id, .. } = render_title("T", 840.0, 100.0) else {
            panic!("expected text");
        };
        assert_eq!(position, Point::new(420.0, -50.0));
        assert_eq!(id.as_deref(), Some("title"));
    }

    #[test]
    fn subtitle_below_title() {
        let RenderCommand::DrawText { position, .. } = render_subtitle("S", 840.0, 100.0) else {
            panic!("expected text");
        };
        assert_eq!(position.y, -25.0);
    }
}
