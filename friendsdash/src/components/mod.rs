mod avatar;
pub use avatar::*;

mod requestrow;
pub use requestrow::*;

mod requestlist;
pub use requestlist::*;

mod profilemodal;
pub use profilemodal::*;
