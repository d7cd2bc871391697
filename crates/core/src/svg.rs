//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write;

use doping_plot_protocol::{Attribute, RenderCommand, TextAlign, ThemeToken};

/// d3's Category10 palette.
const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` are the outer dimensions. `dark` selects the
/// color palette for non-categorical tokens. The root element carries the
/// `graph` class.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160 + 256);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="graph" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:sans-serif;font-size:10px">"#,
    );

    let bg = resolve_color(ThemeToken::Background, dark);
    let _ = write!(svg, r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#);

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect { rect, color } => {
                let fill = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
                    rect.x, rect.y, rect.w, rect.h,
                );
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                color,
                class,
                attributes,
                label,
                ..
            } => {
                let fill = resolve_color(*color, dark);
                svg.push_str("<circle");
                push_class(&mut svg, class.as_deref());
                let _ = write!(
                    svg,
                    r#" cx="{}" cy="{}" r="{radius}" fill="{fill}""#,
                    center.x, center.y,
                );
                push_attributes(&mut svg, attributes);
                close_with_title(&mut svg, "circle", label.as_deref());
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                );
            }
            RenderCommand::DrawText {
                text,
                position,
                color,
                font_size,
                align,
                rotation,
                id,
                class,
            } => {
                let fill = resolve_color(*color, dark);
                svg.push_str("<text");
                if let Some(id) = id {
                    let _ = write!(svg, r#" id="{}""#, escape_xml(id));
                }
                push_class(&mut svg, class.as_deref());
                if *rotation != 0.0 {
                    let _ = write!(svg, r#" transform="rotate({rotation})""#);
                }
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let _ = write!(
                    svg,
                    r#" x="{}" y="{}" fill="{fill}" text-anchor="{anchor}" font-size="{font_size}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                );
            }
            RenderCommand::PushTransform { translate } => {
                let _ = write!(
                    svg,
                    r#"<g transform="translate({},{})">"#,
                    translate.x, translate.y
                );
            }
            RenderCommand::BeginGroup { id, class } => {
                svg.push_str("<g");
                if let Some(id) = id {
                    let _ = write!(svg, r#" id="{}""#, escape_xml(id));
                }
                push_class(&mut svg, class.as_deref());
                svg.push('>');
            }
            RenderCommand::PopTransform | RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn push_class(svg: &mut String, class: Option<&str>) {
    if let Some(class) = class {
        let _ = write!(svg, r#" class="{}""#, escape_xml(class));
    }
}

fn push_attributes(svg: &mut String, attributes: &[Attribute]) {
    for attr in attributes {
        let _ = write!(svg, r#" {}="{}""#, attr.name, escape_xml(&attr.value));
    }
}

/// Close an element, nesting a `<title>` hover label when present.
fn close_with_title(svg: &mut String, tag: &str, label: Option<&str>) {
    match label {
        Some(label) => {
            let _ = write!(svg, "><title>{}</title></{tag}>", escape_xml(label));
        }
        None => svg.push_str("/>"),
    }
}

pub(crate) fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if let ThemeToken::Category(i) = token {
        return CATEGORY10[usize::from(i) % CATEGORY10.len()];
    }
    if dark {
        match token {
            ThemeToken::Background => "#181818",
            ThemeToken::TextPrimary => "#ececec",
            ThemeToken::TextSecondary | ThemeToken::LegendText => "#bdbdbd",
            ThemeToken::AxisLine | ThemeToken::AxisText => "#9e9e9e",
            ThemeToken::Category(_) => "#616161",
        }
    } else {
        match token {
            ThemeToken::Background => "#ffffff",
            ThemeToken::TextPrimary => "#000000",
            ThemeToken::TextSecondary | ThemeToken::LegendText => "#333333",
            ThemeToken::AxisLine | ThemeToken::AxisText => "#000000",
            ThemeToken::Category(_) => "#999999",
        }
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
