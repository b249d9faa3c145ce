use crate::escape_time::EscapeData;

/// Map an escape-time result to a packed `0x00RRGGBB` color.
///
/// Points at the iteration cap are black. Escaped points sweep the
/// green/blue sine palette: with `val = radians(90 * count / cap)`, green is
/// `35 + round(220 * sin(val))` and blue `35 + round(220 * sin(2 * val))`,
/// red stays 0. Channels are clamped to [0, 255]; the formula can brush the
/// upper bound through rounding at the sine peaks.
pub fn escape_color(data: &EscapeData) -> u32 {
    if data.at_cap() {
        return 0;
    }

    let val = (90.0 * data.iterations as f64 / data.max_iterations as f64).to_radians();
    let green = 35.0 + (220.0 * val.sin()).round();
    let blue = 35.0 + (220.0 * (2.0 * val).sin()).round();

    pack_rgb(0, clamp_channel(green), clamp_channel(blue))
}

/// Pack 8-bit channels into `0x00RRGGBB`.
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(iterations: u32, max_iterations: u32) -> EscapeData {
        EscapeData {
            iterations,
            max_iterations,
            escaped: true,
        }
    }

    #[test]
    fn point_at_cap_is_black() {
        let data = EscapeData {
            iterations: 300,
            max_iterations: 300,
            escaped: false,
        };
        assert_eq!(escape_color(&data), 0);
    }

    #[test]
    fn escaped_point_at_cap_count_is_still_black() {
        // A point can diverge on the very update that reaches the cap; it
        // colors black like an interior point.
        assert_eq!(escape_color(&escaped(300, 300)), 0);
    }

    #[test]
    fn half_cap_hits_the_blue_peak() {
        // val = 45 degrees: g = 35 + round(220 * sin 45) = 191,
        // b = 35 + round(220 * sin 90) = 255
        assert_eq!(escape_color(&escaped(300, 600)), 0x00BF_FF);
    }

    #[test]
    fn quarter_cap_value() {
        // val = 22.5 degrees: g = 119, b = 191
        assert_eq!(escape_color(&escaped(75, 300)), 0x0077_BF);
    }

    #[test]
    fn count_just_below_cap_peaks_green() {
        // val ~ 89.7 degrees: g = 255, b = 35 + round(220 * sin 179.4) = 37
        assert_eq!(escape_color(&escaped(299, 300)), 0x00FF_25);
    }

    #[test]
    fn red_channel_is_always_zero() {
        for count in 0..300 {
            assert_eq!(escape_color(&escaped(count, 300)) >> 16, 0);
        }
    }

    #[test]
    fn channels_stay_in_range_across_full_sweep() {
        for cap in [1u32, 2, 3, 300, 301, 600] {
            for count in 0..cap {
                let color = escape_color(&escaped(count, cap));
                assert!(color <= 0x00FF_FF, "color {color:#x} out of 24-bit range");
            }
        }
    }

    #[test]
    fn pack_rgb_layout() {
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x0012_3456);
        assert_eq!(pack_rgb(0, 0, 0), 0);
        assert_eq!(pack_rgb(255, 255, 255), 0x00FF_FFFF);
    }
}
