mod template;

use chrono::Local;

use crate::tools::ToolRegistry;

pub use template::{FORMAT_INSTRUCTIONS, PREFIX, SUFFIX};

/// Prompt assembled from the registered tools: preamble, tool catalogue,
/// format instructions, then the per-turn slots.
#[derive(Debug, Clone)]
pub struct ZeroShotPrompt {
    template: String,
}

impl ZeroShotPrompt {
    #[must_use]
    pub fn build(tools: &ToolRegistry) -> Self {
        let mut template = String::new();

        template.push_str(PREFIX);
        template.push_str("\n\n");

        for line in tools.describe() {
            template.push_str(&line);
            template.push('\n');
        }

        template.push('\n');
        template.push_str(&FORMAT_INSTRUCTIONS.replace("{tool_names}", &tools.names().join(", ")));
        template.push_str("\n\n");

        // The canonical questions are about current facts, so anchor the date.
        template.push_str(&format!(
            "Today's date is {}.\n\n",
            Local::now().format("%Y-%m-%d")
        ));

        template.push_str(SUFFIX);

        Self { template }
    }

    #[must_use]
    pub fn render(&self, chat_history: &str, input: &str, scratchpad: &str) -> String {
        self.template
            .replace("{chat_history}", chat_history)
            .replace("{input}", input)
            .replace("{agent_scratchpad}", scratchpad)
    }
}
