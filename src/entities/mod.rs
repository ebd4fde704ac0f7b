pub mod candidate_follow;
pub mod candidate_view;
pub mod job;
pub mod report;

pub use candidate_follow::NewCandidateFollow;
pub use candidate_view::NewCandidateView;
pub use job::NewJob;
pub use report::{NewReport, ReportType};

pub use candidate_follow::Entity as CandidateFollow;
pub use candidate_view::Entity as CandidateView;
pub use job::Entity as Job;
pub use report::Entity as Report;
