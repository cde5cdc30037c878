use clawome_core::{Config, StateMap};
use clawome_dom::{ElementData, SwitchState};

/// State detection per §4.3: every recognized `stateAttrs` entry copies
/// through (empty value -> `"true"`); form controls additionally read
/// their live `value`, reclassified to `placeholder` when the computed
/// text color looks like a gray placeholder-emulation preset. A
/// switchable-group member carries `selected` (active) or `hidden`
/// (inactive) instead of being excluded — both members stay visible to
/// the caller, distinguished only by this marker (§8 scenario 4).
pub fn detect_state(tag: &str, data: &ElementData, config: &Config) -> StateMap {
    let mut state = StateMap::new();

    match data.switchable {
        Some(SwitchState::Active) => state.insert("selected", "true"),
        Some(SwitchState::Inactive) => state.insert("hidden", "true"),
        None => {}
    }

    for key in &config.state_attrs {
        if let Some(value) = data.attr(key) {
            state.insert(key.clone(), if value.is_empty() { "true" } else { value });
        }
    }

    if matches!(tag, "input" | "textarea" | "select") {
        if let Some(value) = data.attr("value") {
            if !value.is_empty() {
                if tag == "input" && is_gray_placeholder(tag, data, config) {
                    state.insert("placeholder", value);
                } else {
                    state.insert("value", value);
                }
            }
        }
    }

    state
}

fn is_gray_placeholder(tag: &str, data: &ElementData, config: &Config) -> bool {
    let input_type = data.attr("type").unwrap_or("text");
    if !(tag == "input" && config.typeable_input_types.iter().any(|t| t == input_type)) {
        return false;
    }
    is_gray(data.style.color, config)
}

fn is_gray(color: (u8, u8, u8), config: &Config) -> bool {
    let (r, g, b) = color;
    let min = config.gray_text_min_rgb;
    let max_diff = config.gray_text_max_diff;
    let above_floor = r >= min && g >= min && b >= min;
    let close = |a: u8, b: u8| a.abs_diff(b) <= max_diff;
    above_floor && close(r, g) && close(g, b) && close(r, b)
}
