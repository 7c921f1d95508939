//! SVG generation for set-piece diagrams
//!
//! Layout coordinates have y growing away from the goal line; SVG has y
//! growing downwards. Every point goes through [`to_svg`] so the goal sits at
//! the bottom of the picture.

use crate::layout::{Arc, PlacedPlayer, Point, Rect, StaticGeometry};
use crate::stylesheet::Stylesheet;

use super::background::Background;
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add label typography rules
    pub fn add_label_style(&mut self, stylesheet: &Stylesheet) {
        let prefix = self.prefix();
        let font = stylesheet
            .resolve("font-family")
            .unwrap_or("Helvetica, Arial, sans-serif");
        self.styles.push(format!(
            ".{prefix}label {{ font-family: {font}; font-weight: bold; }}"
        ));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn class_list(&self, kind: &str) -> String {
        format!("{}{}", self.prefix(), kind)
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push(&mut self, element: String) {
        let line = format!("{}{}", self.indent_str(), element);
        self.elements.push(line);
    }

    /// Add a rectangle given in pitch coordinates
    pub fn add_rect(&mut self, kind: &str, rect: &Rect, styles: &str) {
        let corner = to_svg(Point::new(rect.x, rect.top()));
        let class = self.class_list(kind);
        self.push(format!(
            r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            class,
            num(corner.x),
            num(corner.y),
            num(rect.width),
            num(rect.height),
            styles
        ));
    }

    /// Add a circle centered on a pitch point
    pub fn add_circle(&mut self, kind: &str, center: Point, r: f64, styles: &str) {
        let c = to_svg(center);
        let class = self.class_list(kind);
        self.push(format!(
            r#"<circle class="{}" cx="{}" cy="{}" r="{}"{}/>"#,
            class,
            num(c.x),
            num(c.y),
            num(r),
            styles
        ));
    }

    /// Add a straight line between two pitch points
    pub fn add_line(&mut self, kind: &str, from: Point, to: Point, styles: &str) {
        let a = to_svg(from);
        let b = to_svg(to);
        let class = self.class_list(kind);
        self.push(format!(
            r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            class,
            num(a.x),
            num(a.y),
            num(b.x),
            num(b.y),
            styles
        ));
    }

    /// Add an arc as a path element
    pub fn add_arc(&mut self, kind: &str, arc: &Arc, styles: &str) {
        let class = self.class_list(kind);
        self.push(format!(
            r#"<path class="{}" d="{}" fill="none"{}/>"#,
            class,
            arc_to_d(arc),
            styles
        ));
    }

    /// Add a text label on a dark box, centered on a pitch point
    pub fn add_label(&mut self, text: &str, at: Point, text_styles: &str, box_styles: &str) {
        let font_size = self.config.font_size;
        let pad = font_size * 0.3;
        // Rough glyph width; the box only has to sit behind the text
        let width = text.chars().count() as f64 * font_size * 0.6 + 2.0 * pad;
        let height = font_size + 2.0 * pad;
        let c = to_svg(at);
        let box_class = self.class_list("label-box");
        let text_class = self.class_list("label");

        self.push(format!(
            r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            box_class,
            num(c.x - width / 2.0),
            num(c.y - height / 2.0),
            num(width),
            num(height),
            box_styles
        ));
        self.push(format!(
            r#"<text class="{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}"{}>{}</text>"#,
            text_class,
            num(c.x),
            num(c.y),
            num(font_size),
            text_styles,
            escape_xml(text)
        ));
    }

    /// Add an embedded image stretched over a pitch rectangle
    pub fn add_image(&mut self, kind: &str, href: &str, extent: &Rect) {
        let corner = to_svg(Point::new(extent.x, extent.top()));
        let class = self.class_list(kind);
        self.push(format!(
            r#"<image class="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none" href="{}"/>"#,
            class,
            num(corner.x),
            num(corner.y),
            num(extent.width),
            num(extent.height),
            escape_xml(href)
        ));
    }

    /// Add a group element with optional ID and classes
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.push(format!("<g{}{}>", id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.push("</g>".to_string());
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let vp = self.config.viewport;
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // The viewport's top edge is the furthest point from the goal line
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            num(vp.x),
            num(0.0 - vp.top()),
            num(vp.width),
            num(vp.height)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render placed players on the pitch markings
///
/// Drawing order: background, markings, then for each player its shadow,
/// marker and name label.
pub fn render_svg(
    placed: &[PlacedPlayer],
    geometry: &StaticGeometry,
    background: &Background,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_label_style(stylesheet);

    match background {
        Background::Color(color) => {
            let fill = format!(r#" fill="{}""#, escape_xml(color));
            builder.add_rect("grass", &config.viewport, &fill);
        }
        Background::Image { data_uri } => {
            builder.add_image("grass", data_uri, &config.texture_extent);
        }
    }

    render_pitch(geometry, config, stylesheet, &mut builder);

    let prefix = config.class_prefix.clone().unwrap_or_default();
    builder.start_group(Some("players"), &[]);
    for player in placed {
        render_player(player, config, stylesheet, &prefix, &mut builder);
    }
    builder.end_group();

    builder.build()
}

fn render_pitch(
    geometry: &StaticGeometry,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
    builder: &mut SvgBuilder,
) {
    let line = escape_xml(&stylesheet.resolve_or_default("pitch-line"));
    let stroke = format!(
        r#" stroke="{}" stroke-width="{}" stroke-opacity="0.9""#,
        line,
        num(config.line_width)
    );
    let area = format!(
        r#" fill="{}" fill-opacity="0.1"{}"#,
        escape_xml(&stylesheet.resolve_or_default("pitch-area")),
        stroke
    );
    let goal = format!(
        r#" fill="{}" stroke="{}" stroke-width="{}""#,
        escape_xml(&stylesheet.resolve_or_default("pitch-goal")),
        escape_xml(&stylesheet.resolve_or_default("pitch-goal-outline")),
        num(config.line_width)
    );

    builder.start_group(Some("pitch"), &[]);
    for segment in &geometry.lines {
        builder.add_line("line", segment.from, segment.to, &stroke);
    }
    builder.add_rect("penalty-area", &geometry.penalty_area, &area);
    builder.add_rect("six-yard-area", &geometry.six_yard_area, &area);
    builder.add_rect("goal", &geometry.goal, &goal);
    builder.add_circle(
        "penalty-spot",
        geometry.penalty_spot,
        config.line_width * 1.5,
        &format!(r#" fill="{}""#, line),
    );
    builder.add_arc("penalty-arc", &geometry.penalty_arc, &stroke);
    builder.end_group();
}

fn render_player(
    player: &PlacedPlayer,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
    prefix: &str,
    builder: &mut SvgBuilder,
) {
    let id = format!("player-{}", player.zone.key());
    builder.start_group(Some(&id), &[format!("{}player", prefix)]);

    let (dx, dy) = config.shadow_offset;
    builder.add_circle(
        "shadow",
        player.position.offset(dx, dy),
        config.marker_radius,
        &format!(
            r#" fill="{}" fill-opacity="0.4""#,
            escape_xml(&stylesheet.resolve_or_default("player-shadow"))
        ),
    );
    builder.add_circle(
        "marker",
        player.position,
        config.marker_radius,
        &format!(
            r#" fill="{}" stroke="{}" stroke-width="{}""#,
            escape_xml(&stylesheet.resolve_or_default("player-fill")),
            escape_xml(&stylesheet.resolve_or_default("player-outline")),
            num(config.line_width * 2.0 / 3.0)
        ),
    );
    builder.add_label(
        &player.name,
        player.position.offset(0.0, config.label_offset),
        &format!(
            r#" fill="{}""#,
            escape_xml(&stylesheet.resolve_or_default("label-text"))
        ),
        &format!(
            r#" fill="{}" fill-opacity="0.6""#,
            escape_xml(&stylesheet.resolve_or_default("label-box"))
        ),
    );

    builder.end_group();
}

/// Map a pitch point to SVG user space
fn to_svg(p: Point) -> Point {
    // `0.0 - y` keeps the goal line at 0 rather than -0
    Point::new(p.x, 0.0 - p.y)
}

/// Convert an arc to an SVG path d attribute
fn arc_to_d(arc: &Arc) -> String {
    let start = to_svg(arc.start_point());
    let end = to_svg(arc.end_point());
    let large_arc = u8::from(arc.sweep().abs() > 180.0);
    // Counter-clockwise on the pitch is counter-clockwise on screen too,
    // which SVG encodes as sweep-flag 0
    let sweep = u8::from(arc.sweep() < 0.0);
    format!(
        "M{} {} A{} {} 0 {} {} {} {}",
        num(start.x),
        num(start.y),
        num(arc.radius),
        num(arc.radius),
        large_arc,
        sweep,
        num(end.x),
        num(end.y)
    )
}

/// Format a coordinate with at most three decimals
fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
