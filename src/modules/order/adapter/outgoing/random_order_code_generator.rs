use crate::order::application::domain::OrderCode;
use crate::order::application::ports::outgoing::OrderCodeGenerator;

#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOrderCodeGenerator;

impl OrderCodeGenerator for RandomOrderCodeGenerator {
    fn next_code(&self) -> OrderCode {
        OrderCode::generate(&mut rand::thread_rng())
    }
}
