#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub max_iterations: usize,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            max_tokens: 1024,
            temperature: 0.0,
        }
    }
}
