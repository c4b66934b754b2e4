use crate::error::ScatterResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

/// Renderer producing a standalone SVG document from each frame.
///
/// The chart this engine reproduces drew into an SVG surface; this backend
/// keeps that output form without any drawing-library dependency. The last
/// rendered document is retained and can be fetched with [`SvgRenderer::document`].
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The SVG markup of the most recent frame, if any was rendered.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn into_document(self) -> Option<String> {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;

        let mut svg = String::with_capacity(1024);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = frame.viewport.width,
            h = frame.viewport.height,
        ));

        for line in &frame.lines {
            svg.push_str(&format!(
                "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" \
                 stroke=\"{stroke}\" stroke-width=\"{width:.2}\"/>\n",
                x1 = line.x1,
                y1 = line.y1,
                x2 = line.x2,
                y2 = line.y2,
                stroke = css_color(line.color),
                width = line.stroke_width,
            ));
        }

        for circle in &frame.circles {
            svg.push_str(&format!(
                "  <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{fill}\"/>\n",
                cx = circle.cx,
                cy = circle.cy,
                r = circle.radius,
                fill = css_color(circle.fill),
            ));
        }

        for text in &frame.texts {
            svg.push_str(&text_tag(text));
        }

        svg.push_str("</svg>\n");
        self.document = Some(svg);
        Ok(())
    }
}

fn text_tag(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let rotation = if text.rotation_degrees == 0.0 {
        String::new()
    } else {
        format!(
            " transform=\"rotate({deg:.1} {x:.2} {y:.2})\"",
            deg = text.rotation_degrees,
            x = text.x,
            y = text.y,
        )
    };

    format!(
        "  <text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"{size:.1}\" fill=\"{fill}\" \
         text-anchor=\"{anchor}\"{rotation}>{body}</text>\n",
        x = text.x,
        y = text.y,
        size = text.font_size_px,
        fill = css_color(text.color),
        body = escape_text(&text.text),
    )
}

fn css_color(color: Color) -> String {
    let channel = |value: f64| (value * 255.0).round() as u8;
    if color.alpha >= 1.0 {
        format!(
            "rgb({},{},{})",
            channel(color.red),
            channel(color.green),
            channel(color.blue)
        )
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            channel(color.red),
            channel(color.green),
            channel(color.blue),
            color.alpha
        )
    }
}

fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
