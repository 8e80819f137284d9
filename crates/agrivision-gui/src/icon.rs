//! AgriVision application icon generator.
//!
//! Produces a procedural icon: a green leaf with a midrib and a short stem,
//! set on a dark round badge. Rendered at any resolution as RGBA pixels for
//! use as the window icon.

/// Generate the AgriVision icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let cx = s * 0.5;
    let cy = s * 0.5;
    let badge_radius = s * 0.47;

    // The leaf is the overlap of two circles, tilted 45° toward the top-right.
    let leaf_half_len = s * 0.33;
    let leaf_half_width = s * 0.15;
    // Circle radius and offset that give the requested length and width.
    let lens_r = (leaf_half_len * leaf_half_len + leaf_half_width * leaf_half_width)
        / (2.0 * leaf_half_width);
    let lens_off = lens_r - leaf_half_width;
    let (sin_a, cos_a) = std::f32::consts::FRAC_PI_4.sin_cos();

    let rib_width = s * 0.018;
    let stem_width = s * 0.03;

    const BADGE: [u8; 3] = [0x1f, 0x4a, 0x33];
    const LEAF_LIGHT: [u8; 3] = [0x8b, 0xe0, 0x9f];
    const LEAF_DARK: [u8; 3] = [0x2f, 0xa8, 0x5c];
    const RIB: [u8; 3] = [0x1a, 0x6b, 0x3c];

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = px - cx;
            let dy = py - cy;

            // 1. Badge. ──────────────────────────────────────────
            let badge_dist = (dx * dx + dy * dy).sqrt();
            let badge_a = smooth_edge(badge_dist, badge_radius);
            if badge_a <= 0.0 {
                continue;
            }
            let mut col = BADGE;

            // Leaf-local coordinates: `u` runs tip to tip, `v` across.
            let u = dx * cos_a - dy * sin_a;
            let v = dx * sin_a + dy * cos_a;

            // 2. Stem, below the lower-left tip. ─────────────────
            let stem_dist = point_to_seg_dist(
                u,
                v,
                -leaf_half_len * 1.25,
                0.0,
                -leaf_half_len * 0.8,
                0.0,
            );
            let stem_a = smooth_edge(stem_dist, stem_width * 0.5);
            col = blend(col, RIB, stem_a);

            // 3. Leaf body. ──────────────────────────────────────
            let d_upper = (u * u + (v - lens_off).powi(2)).sqrt();
            let d_lower = (u * u + (v + lens_off).powi(2)).sqrt();
            let leaf_a = smooth_edge(d_upper.max(d_lower), lens_r);
            if leaf_a > 0.0 {
                // Lighter on one side of the midrib.
                let t = ((v / leaf_half_width) * 0.5 + 0.5).clamp(0.0, 1.0);
                let shade = [
                    lerp_c(LEAF_LIGHT[0], LEAF_DARK[0], t),
                    lerp_c(LEAF_LIGHT[1], LEAF_DARK[1], t),
                    lerp_c(LEAF_LIGHT[2], LEAF_DARK[2], t),
                ];
                col = blend(col, shade, leaf_a);

                // 4. Midrib. ─────────────────────────────────────
                let rib_dist =
                    point_to_seg_dist(u, v, -leaf_half_len * 0.85, 0.0, leaf_half_len * 0.8, 0.0);
                let rib_a = smooth_edge(rib_dist, rib_width * 0.5) * leaf_a;
                col = blend(col, RIB, rib_a);
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = col[0];
            pixels[idx + 1] = col[1];
            pixels[idx + 2] = col[2];
            pixels[idx + 3] = (badge_a * 255.0).round() as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Perpendicular distance from a point to a line segment.
fn point_to_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    ((px - (ax + t * abx)).powi(2) + (py - (ay + t * aby)).powi(2)).sqrt()
}

/// Paint `top` over `base` with coverage `alpha`.
fn blend(base: [u8; 3], top: [u8; 3], alpha: f32) -> [u8; 3] {
    [
        lerp_c(base[0], top[0], alpha),
        lerp_c(base[1], top[1], alpha),
        lerp_c(base[2], top[2], alpha),
    ]
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn test_buffer_dimensions() {
        let icon = generate_icon(32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
        assert_eq!((icon.width, icon.height), (32, 32));
    }

    #[test]
    fn test_corners_transparent_centre_opaque() {
        let buf = render_icon(64);
        assert_eq!(pixel(&buf, 64, 0, 0)[3], 0);
        assert_eq!(pixel(&buf, 64, 63, 63)[3], 0);
        assert_eq!(pixel(&buf, 64, 32, 32)[3], 255);
    }

    #[test]
    fn test_leaf_is_green() {
        let buf = render_icon(64);
        // A point on the leaf body, just off the midrib.
        let [r, g, b, _] = pixel(&buf, 64, 39, 30);
        assert!(g > r && g > b, "expected green, got {r},{g},{b}");
    }
}
