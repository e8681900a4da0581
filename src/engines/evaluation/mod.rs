pub mod agent;
pub mod course;
pub mod fitness;
pub mod population;

pub use agent::Agent;
pub use course::Course;
pub use population::Population;
