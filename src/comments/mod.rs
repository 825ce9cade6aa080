//! Comments slice: stored comments plus the load error banner.

mod reducer;
mod state;

pub use reducer::CommentsReducer;
pub use state::{Comment, CommentId, CommentsState, NewComment, Rating, RatingError};
