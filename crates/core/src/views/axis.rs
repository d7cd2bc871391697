use doping_plot_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

use crate::model::record::TIME_FORMAT;
use crate::scales::linear::format_integer;
use crate::scales::{DEFAULT_TICK_COUNT, LinearScale, TimeScale};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const FONT_SIZE: f64 = 10.0;
/// Baseline shift that vertically centers/hangs tick text, in ems.
const BOTTOM_TEXT_DY: f64 = 0.71;
const LEFT_TEXT_DY: f64 = 0.32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Bottom,
    Left,
}

/// A tick position along the axis (in pixels) and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Render the year axis along the bottom of the plot area.
///
/// Ticks are integer years; the axis title sits at the right end, just
/// above the axis line.
pub fn render_x_axis(scale: &LinearScale, plot_height: f64, title: &str) -> Vec<RenderCommand> {
    let ticks = scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|v| Tick {
            offset: scale.apply(v),
            label: format_integer(v),
        })
        .collect();

    let (_, range_end) = scale.range();
    let title = RenderCommand::DrawText {
        position: Point::new(range_end, -6.0),
        text: title.to_string(),
        color: ThemeToken::AxisText,
        font_size: FONT_SIZE,
        align: TextAlign::Right,
        rotation: 0.0,
        id: None,
        class: Some("x-axis-label".into()),
    };

    let mut commands = vec![RenderCommand::BeginGroup {
        id: Some("x-axis".into()),
        class: Some("x axis".into()),
    }];
    commands.push(RenderCommand::PushTransform {
        translate: Point::new(0.0, plot_height),
    });
    render_axis_body(&mut commands, Orientation::Bottom, scale.range(), ticks);
    commands.push(title);
    commands.push(RenderCommand::PopTransform);
    commands.push(RenderCommand::EndGroup);
    commands
}

/// Render the race-time axis along the left of the plot area, with
/// `MM:SS` tick labels and a rotated title.
pub fn render_y_axis(scale: &TimeScale, title: &str) -> Vec<RenderCommand> {
    let ticks = scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|t| Tick {
            offset: scale.apply(t),
            label: t.format(TIME_FORMAT).to_string(),
        })
        .collect();

    let title = RenderCommand::DrawText {
        position: Point::new(0.0, 6.0 + BOTTOM_TEXT_DY * FONT_SIZE),
        text: title.to_string(),
        color: ThemeToken::AxisText,
        font_size: FONT_SIZE,
        align: TextAlign::Right,
        rotation: -90.0,
        id: None,
        class: Some("label".into()),
    };

    let mut commands = vec![RenderCommand::BeginGroup {
        id: Some("y-axis".into()),
        class: Some("y axis".into()),
    }];
    render_axis_body(&mut commands, Orientation::Left, scale.range(), ticks);
    commands.push(title);
    commands.push(RenderCommand::EndGroup);
    commands
}

/// Domain line with outer ticks, then one `g.tick` per tick.
fn render_axis_body(
    commands: &mut Vec<RenderCommand>,
    orientation: Orientation,
    range: (f64, f64),
    ticks: Vec<Tick>,
) {
    let along = |offset: f64, across: f64| match orientation {
        Orientation::Bottom => Point::new(offset, across),
        Orientation::Left => Point::new(-across, offset),
    };

    commands.push(RenderCommand::DrawLine {
        from: along(range.0, 0.0),
        to: along(range.1, 0.0),
        color: ThemeToken::AxisLine,
        width: 1.0,
    });
    for end in [range.0, range.1] {
        commands.push(RenderCommand::DrawLine {
            from: along(end, 0.0),
            to: along(end, TICK_SIZE),
            color: ThemeToken::AxisLine,
            width: 1.0,
        });
    }

    for tick in ticks {
        commands.push(RenderCommand::BeginGroup {
            id: None,
            class: Some("tick".into()),
        });
        commands.push(RenderCommand::DrawLine {
            from: along(tick.offset, 0.0),
            to: along(tick.offset, TICK_SIZE),
            color: ThemeToken::AxisLine,
            width: 1.0,
        });
        let (position, align) = match orientation {
            Orientation::Bottom => (
                Point::new(
                    tick.offset,
                    TICK_SIZE + TICK_PADDING + BOTTOM_TEXT_DY * FONT_SIZE,
                ),
                TextAlign::Center,
            ),
            Orientation::Left => (
                Point::new(
                    -(TICK_SIZE + TICK_PADDING),
                    tick.offset + LEFT_TEXT_DY * FONT_SIZE,
                ),
                TextAlign::Right,
            ),
        };
        commands.push(RenderCommand::DrawText {
            position,
            text: tick.label,
            color: ThemeToken::AxisText,
            font_size: FONT_SIZE,
            align,
            rotation: 0.0,
            id: None,
            class: None,
        });
        commands.push(RenderCommand::EndGroup);
    }
}
