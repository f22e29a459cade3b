use super::PATH_LEN;

/// Instruction sent with every analysis. The scenario text is embedded as-is,
/// empty string included.
pub fn build_prompt(scenario: &str) -> String {
    format!(
        "Analyze the following scenario from two psychological perspectives: \
         \"Survival Mode\" (Fear, Scarcity, Immediate Reaction) and \
         \"Creative Mode\" (Vision, Abundance, Conscious Creation).\n\
         Scenario: \"{scenario}\"\n\n\
         Return a detailed path of {PATH_LEN} action steps for each mode."
    )
}
