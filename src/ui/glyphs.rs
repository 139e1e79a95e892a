//! Built-in vector glyph shapes.
//!
//! The full icon catalog is an external asset; the editor ships a small set
//! of stroke-based shapes in a normalized `[0, 1]` square, used by the icon
//! grid, the preview and the SVG export. Names without a dedicated shape
//! render a generic placeholder.

/// A stroke-only drawing primitive in normalized `[0, 1]` coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphPrimitive {
    /// A circle outline.
    Circle {
        /// Center in normalized coordinates.
        center: (f32, f32),
        /// Radius in normalized units.
        radius: f32,
    },
    /// A straight line segment.
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
    },
    /// A connected sequence of line segments.
    Polyline {
        /// Vertices in draw order.
        points: Vec<(f32, f32)>,
        /// Whether the last vertex connects back to the first.
        closed: bool,
    },
}

fn poly(points: &[(f32, f32)], closed: bool) -> GlyphPrimitive {
    GlyphPrimitive::Polyline {
        points: points.to_vec(),
        closed,
    }
}

/// Returns the stroke primitives for the named glyph, or a generic
/// placeholder shape when no dedicated shape exists.
pub fn glyph(name: &str) -> Vec<GlyphPrimitive> {
    match name {
        "Circle" => vec![GlyphPrimitive::Circle {
            center: (0.5, 0.5),
            radius: 0.4,
        }],
        "Check" => vec![poly(&[(0.2, 0.55), (0.42, 0.75), (0.8, 0.3)], false)],
        "Plus" => vec![
            GlyphPrimitive::Line {
                from: (0.5, 0.15),
                to: (0.5, 0.85),
            },
            GlyphPrimitive::Line {
                from: (0.15, 0.5),
                to: (0.85, 0.5),
            },
        ],
        "Star" => vec![poly(
            &[
                (0.5, 0.05),
                (0.606, 0.354),
                (0.928, 0.361),
                (0.671, 0.556),
                (0.765, 0.864),
                (0.5, 0.68),
                (0.235, 0.864),
                (0.329, 0.556),
                (0.072, 0.361),
                (0.394, 0.354),
            ],
            true,
        )],
        "Heart" => vec![poly(
            &[
                (0.5, 0.85),
                (0.15, 0.5),
                (0.15, 0.3),
                (0.3, 0.18),
                (0.5, 0.3),
                (0.7, 0.18),
                (0.85, 0.3),
                (0.85, 0.5),
            ],
            true,
        )],
        "Search" => vec![
            GlyphPrimitive::Circle {
                center: (0.45, 0.45),
                radius: 0.25,
            },
            GlyphPrimitive::Line {
                from: (0.63, 0.63),
                to: (0.85, 0.85),
            },
        ],
        "Sun" => {
            let mut prims = vec![GlyphPrimitive::Circle {
                center: (0.5, 0.5),
                radius: 0.2,
            }];
            for i in 0..8 {
                let angle = (i as f32) * std::f32::consts::FRAC_PI_4;
                let (sin, cos) = angle.sin_cos();
                prims.push(GlyphPrimitive::Line {
                    from: (0.5 + 0.3 * cos, 0.5 + 0.3 * sin),
                    to: (0.5 + 0.44 * cos, 0.5 + 0.44 * sin),
                });
            }
            prims
        }
        "Zap" => vec![poly(
            &[
                (0.6, 0.1),
                (0.25, 0.55),
                (0.48, 0.55),
                (0.4, 0.9),
                (0.75, 0.45),
                (0.52, 0.45),
            ],
            true,
        )],
        "Home" => vec![
            poly(&[(0.15, 0.5), (0.5, 0.15), (0.85, 0.5)], false),
            poly(
                &[(0.25, 0.45), (0.25, 0.85), (0.75, 0.85), (0.75, 0.45)],
                false,
            ),
        ],
        "Mail" => vec![
            poly(
                &[(0.15, 0.25), (0.85, 0.25), (0.85, 0.75), (0.15, 0.75)],
                true,
            ),
            poly(&[(0.15, 0.3), (0.5, 0.55), (0.85, 0.3)], false),
        ],
        "Lock" => vec![
            poly(
                &[(0.25, 0.45), (0.75, 0.45), (0.75, 0.85), (0.25, 0.85)],
                true,
            ),
            poly(
                &[
                    (0.35, 0.45),
                    (0.35, 0.28),
                    (0.43, 0.18),
                    (0.57, 0.18),
                    (0.65, 0.28),
                    (0.65, 0.45),
                ],
                false,
            ),
        ],
        "Bell" => vec![
            poly(
                &[
                    (0.22, 0.7),
                    (0.3, 0.62),
                    (0.3, 0.42),
                    (0.38, 0.26),
                    (0.5, 0.2),
                    (0.62, 0.26),
                    (0.7, 0.42),
                    (0.7, 0.62),
                    (0.78, 0.7),
                ],
                true,
            ),
            GlyphPrimitive::Line {
                from: (0.45, 0.8),
                to: (0.55, 0.8),
            },
        ],
        _ => vec![
            poly(&[(0.2, 0.2), (0.8, 0.2), (0.8, 0.8), (0.2, 0.8)], true),
            GlyphPrimitive::Circle {
                center: (0.5, 0.5),
                radius: 0.08,
            },
        ],
    }
}

/// Paints `primitives` into `rect` with the given stroke.
pub fn paint_glyph(
    painter: &egui::Painter,
    rect: egui::Rect,
    primitives: &[GlyphPrimitive],
    stroke: egui::Stroke,
) {
    let to_pos = |p: (f32, f32)| -> egui::Pos2 {
        egui::pos2(
            rect.min.x + p.0 * rect.width(),
            rect.min.y + p.1 * rect.height(),
        )
    };
    let scale = rect.width().min(rect.height());

    for prim in primitives {
        match prim {
            GlyphPrimitive::Circle { center, radius } => {
                painter.circle_stroke(to_pos(*center), radius * scale, stroke);
            }
            GlyphPrimitive::Line { from, to } => {
                painter.line_segment([to_pos(*from), to_pos(*to)], stroke);
            }
            GlyphPrimitive::Polyline { points, closed } => {
                let mut pts: Vec<egui::Pos2> = points.iter().map(|p| to_pos(*p)).collect();
                if *closed {
                    if let Some(first) = pts.first().copied() {
                        pts.push(first);
                    }
                }
                painter.add(egui::Shape::line(pts, stroke));
            }
        }
    }
}

/// Paints a rotated glyph: the primitives are rotated by `degrees` around
/// the rect center before being drawn.
pub fn paint_glyph_rotated(
    painter: &egui::Painter,
    rect: egui::Rect,
    primitives: &[GlyphPrimitive],
    stroke: egui::Stroke,
    degrees: f32,
) {
    if degrees == 0.0 {
        paint_glyph(painter, rect, primitives, stroke);
        return;
    }
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let rotate = |p: (f32, f32)| -> (f32, f32) {
        let (dx, dy) = (p.0 - 0.5, p.1 - 0.5);
        (0.5 + dx * cos - dy * sin, 0.5 + dx * sin + dy * cos)
    };

    let rotated: Vec<GlyphPrimitive> = primitives
        .iter()
        .map(|prim| match prim {
            GlyphPrimitive::Circle { center, radius } => GlyphPrimitive::Circle {
                center: rotate(*center),
                radius: *radius,
            },
            GlyphPrimitive::Line { from, to } => GlyphPrimitive::Line {
                from: rotate(*from),
                to: rotate(*to),
            },
            GlyphPrimitive::Polyline { points, closed } => GlyphPrimitive::Polyline {
                points: points.iter().map(|p| rotate(*p)).collect(),
                closed: *closed,
            },
        })
        .collect();
    paint_glyph(painter, rect, &rotated, stroke);
}

/// Serializes `primitives` to SVG elements with normalized coordinates,
/// suitable for embedding in a unit-scaled `<g>` group.
pub fn to_svg_elements(primitives: &[GlyphPrimitive]) -> String {
    let mut out = String::new();
    for prim in primitives {
        match prim {
            GlyphPrimitive::Circle { center, radius } => {
                out.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
                    center.0, center.1, radius
                ));
            }
            GlyphPrimitive::Line { from, to } => {
                out.push_str(&format!(
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
                    from.0, from.1, to.0, to.1
                ));
            }
            GlyphPrimitive::Polyline { points, closed } => {
                let coords: Vec<String> =
                    points.iter().map(|p| format!("{},{}", p.0, p.1)).collect();
                let tag = if *closed { "polygon" } else { "polyline" };
                out.push_str(&format!("<{} points=\"{}\"/>", tag, coords.join(" ")));
            }
        }
    }
    out
}
