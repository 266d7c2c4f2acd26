// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod neg;
pub mod square;
pub mod sub;

pub use add::add_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use square::square_op;
pub use sub::sub_op;
