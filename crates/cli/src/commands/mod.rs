pub mod compare;
pub mod gaps;
pub mod inspect;
pub mod mutate;
pub mod neff;
pub mod offspring;
