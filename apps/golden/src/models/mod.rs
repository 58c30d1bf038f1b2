pub mod cv;
pub mod github;
pub mod linkedin;
pub mod source;
pub mod unified;

pub use cv::ExtractedCv;
pub use github::GitHubProfile;
pub use linkedin::LinkedInProfile;
pub use source::{SourceKind, SourceProfile};
pub use unified::{UnifiedContactInfo, UnifiedProfile, UnifiedProject, UnifiedWorkExperience};
