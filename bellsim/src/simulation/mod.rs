pub mod states;
pub mod params;
pub mod forces;
pub mod contact;
pub mod rope;
pub mod integrator;
pub mod environment;
pub mod history;
pub mod episode;
pub mod scenario;
