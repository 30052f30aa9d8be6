use yew::prelude::*;
use yew_hooks::prelude::*;

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    #[prop_or("")]
    pub suffix: &'static str,
    #[prop_or(2_000)]
    pub duration_ms: u32,
}

/// Value shown `elapsed_ms` into the animation, easing out towards `end`.
pub fn counter_value(end: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return end;
    }
    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (f64::from(end) * eased).round().min(f64::from(end)) as u32
}

/// 2847 -> "2,847"
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let elapsed = use_state(|| 0u32);
    let running = *elapsed < props.duration_ms;

    {
        let elapsed = elapsed.clone();
        // 0 stops the interval once the target is reached
        use_interval(
            move || elapsed.set(elapsed.saturating_add(FRAME_MS)),
            if running { FRAME_MS } else { 0 },
        );
    }

    let value = counter_value(props.end, *elapsed, props.duration_ms);
    html! {
        <span class="animated-counter">{format_count(value)}{props.suffix}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(counter_value(2847, 0, 2_000), 0);
        assert_eq!(counter_value(2847, 2_000, 2_000), 2847);
        assert_eq!(counter_value(2847, 5_000, 2_000), 2847);
        assert_eq!(counter_value(95, 10, 0), 95);
    }

    #[test]
    fn never_decreases_or_overshoots() {
        let mut last = 0;
        for elapsed in (0..=2_000).step_by(FRAME_MS as usize) {
            let v = counter_value(9, elapsed, 2_000);
            assert!(v >= last && v <= 9);
            last = v;
        }
    }

    #[test]
    fn eases_out() {
        // more than half the distance covered at the halfway mark
        assert!(counter_value(1000, 1_000, 2_000) > 500);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(95), "95");
        assert_eq!(format_count(2847), "2,847");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
