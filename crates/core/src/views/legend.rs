use doping_plot_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::config::Labels;
use crate::scales::OrdinalScale;

const SWATCH_SIZE: f64 = 18.0;
const ROW_SPACING: f64 = 20.0;
const TEXT_GAP: f64 = 6.0;
const FONT_SIZE: f64 = 12.0;

/// Render one legend row per entry of the doping color domain.
///
/// Rows are right-aligned to the plot area and stack upward from the
/// vertical middle, in domain order.
pub fn render_legend(
    color: &OrdinalScale<bool>,
    labels: &Labels,
    plot_width: f64,
    plot_height: f64,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(color.domain().len() * 6 + 2);
    commands.push(RenderCommand::BeginGroup {
        id: Some("legend".into()),
        class: None,
    });

    for (i, doped) in color.domain().iter().enumerate() {
        let Some(fill) = color.get(doped) else {
            continue;
        };
        let text = if *doped {
            &labels.legend_doping
        } else {
            &labels.legend_clean
        };

        commands.push(RenderCommand::BeginGroup {
            id: None,
            class: Some("legend-label".into()),
        });
        commands.push(RenderCommand::PushTransform {
            translate: Point::new(0.0, plot_height / 2.0 - i as f64 * ROW_SPACING),
        });
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(plot_width - SWATCH_SIZE, 0.0, SWATCH_SIZE, SWATCH_SIZE),
            color: fill,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(
                plot_width - SWATCH_SIZE - TEXT_GAP,
                SWATCH_SIZE / 2.0 + 0.35 * FONT_SIZE,
            ),
            text: text.clone(),
            color: ThemeToken::LegendText,
            font_size: FONT_SIZE,
            align: TextAlign::Right,
            rotation: 0.0,
            id: None,
            class: None,
        });
        commands.push(RenderCommand::PopTransform);
        commands.push(RenderCommand::EndGroup);
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
