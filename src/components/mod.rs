mod activities_board;
mod activities_list;
mod activity_card;
mod message_display;
mod message_timer;
mod signup_form;

pub use activities_board::{ActivitiesBoard, ActivitiesBoardProps};
pub use activities_list::{ActivitiesListComp, ActivitiesListProps};
pub use activity_card::{resolve_delete_target, ActivityCardComp, ActivityCardProps};
pub use message_display::{MessageDisplayComp, MessageDisplayProps};
pub use message_timer::MessageTimer;
pub use signup_form::{SignupFields, SignupFormComp, SignupFormProps};
