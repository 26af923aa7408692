pub mod config;
pub mod logging;

pub mod directory;
pub mod link;
pub mod narrow;
pub mod nav;
pub mod operand;
pub mod realm;
pub mod resolve;

pub use link::LinkKind;
pub use narrow::Narrow;
pub use realm::{PrefixMatcher, Realm, RealmMatcher};
pub use resolve::LinkResolver;
