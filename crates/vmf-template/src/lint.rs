use std::collections::HashSet;

use thiserror::Error;
use vmf_core::constants::SIDES_PER_SOLID;

use crate::template::MapTemplate;

/// Findings that do not stop a template from building but probably
/// indicate a mistake. Solid indices are positions in the template list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateWarning {
    #[error("solid #{solid}: slot {slot} is outside 1..=6, the side will be ignored")]
    SlotOutOfRange { solid: usize, slot: usize },
    #[error("solid #{solid}: slot {slot} is bound more than once, the last binding wins")]
    SlotBoundTwice { solid: usize, slot: usize },
    #[error("solid #{solid}: slot {slot} is never bound, an empty side will be written")]
    SlotNeverBound { solid: usize, slot: usize },
}

/// Check every solid's side bindings.
pub fn lint_template(template: &MapTemplate) -> Vec<TemplateWarning> {
    let mut warnings = Vec::new();

    for (solid, solid_template) in template.solids.iter().enumerate() {
        let mut bound = HashSet::new();
        for binding in &solid_template.sides {
            let slot = binding.slot;
            if !(1..=SIDES_PER_SOLID).contains(&slot) {
                warnings.push(TemplateWarning::SlotOutOfRange { solid, slot });
            } else if !bound.insert(slot) {
                warnings.push(TemplateWarning::SlotBoundTwice { solid, slot });
            }
        }
        for slot in 1..=SIDES_PER_SOLID {
            if !bound.contains(&slot) {
                warnings.push(TemplateWarning::SlotNeverBound { solid, slot });
            }
        }
    }

    warnings
}
