use tracing::info;

use crate::core::Result;
use crate::core::agent::{AgentEvent, AgentEventHandler, AgentExecutor};

/// Console printer for the reasoning trace, attached when `--verbose` is
/// set. Step text already carries the Thought/Action lines.
pub struct TraceHandler;

impl AgentEventHandler for TraceHandler {
    fn handle(&self, event: AgentEvent) {
        match event {
            AgentEvent::Step { text } => println!("{}", text.trim()),
            AgentEvent::ToolFinished { observation, .. } => {
                println!("Observation: {observation}");
            }
            AgentEvent::ToolStarted { .. } | AgentEvent::Finished { .. } => {}
        }
    }
}

fn output_width() -> usize {
    terminal_size::terminal_size().map_or(80, |(w, _)| usize::from(w.0).min(100))
}

/// One shared executor answers every question, so each answer lands in
/// memory before the next question is asked.
pub async fn run_session(executor: &mut AgentExecutor, questions: &[String]) -> Result<()> {
    let width = output_width();

    for question in questions {
        println!("Question: {question}");

        let outcome = executor.run(question.clone()).await?;

        info!(
            steps = outcome.steps.len(),
            tokens = outcome.usage.total(),
            "question answered"
        );

        println!("{}", textwrap::fill(&outcome.answer, width));
        println!();
    }

    Ok(())
}
