pub mod api;
pub mod friendship_models;
pub mod goal_models;
pub mod profile_models;
pub mod quiz_models;
pub mod review_models;
pub mod session_models;
pub mod subject_models;

pub use api::ApiResponse;
pub use friendship_models::{
    FriendEntry, FriendRequestForm, Friendship, FriendshipAction, FriendshipStatus, NewFriendship,
    RespondForm,
};
pub use goal_models::{CreateGoalForm, Goal, NewGoal};
pub use profile_models::{
    AvatarForm, DisplayNameError, DisplayNameForm, ProfileView, RankingEntry, UserProfile,
};
pub use quiz_models::{QuizForm, QuizItem, QuizOption, QuizResponse};
pub use review_models::{
    CompleteReviewForm, Difficulty, NewReview, Review, ReviewCompleted, ReviewStatus,
};
pub use session_models::{LogSessionForm, NewStudySession, SessionSaved, StudySession};
pub use subject_models::{CreateSubjectForm, NewSubject, Subject};
