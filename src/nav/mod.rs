//! Navigations-Datenbank: Benutzer, Sitzungen und Fragen in SQLite.

pub mod avatar;
pub mod dao;
pub mod error;
pub mod model;
pub mod navigation;
pub mod timestamp;
pub mod user_agent;
pub mod validation;

pub use dao::NavigationDao;
pub use error::{NavDaoError, NavResult};
pub use model::{Answer, Problem, Session, User};
pub use navigation::Navigation;
pub use user_agent::UserAgent;
