//! Capability keys for guardable operations.
//!
//! A capability is a `group:action` string baked into a route at
//! registration time. Groups correspond to the dashboard menus; actions are
//! the four CRUD verbs.

pub const GROUP_USER: &str = "user";
pub const GROUP_CATEGORY: &str = "category";
pub const GROUP_ROLE: &str = "role";
pub const GROUP_PERMISSIONS: &str = "permissions";
pub const GROUP_ROLE_PERMISSIONS: &str = "role_permissions";
pub const GROUP_PRODUCT: &str = "product";

pub const ACTION_CREATE: &str = "create";
pub const ACTION_READ: &str = "read";
pub const ACTION_UPDATE: &str = "update";
pub const ACTION_DELETE: &str = "delete";

pub const USER_CREATE: &str = "user:create";
pub const USER_READ: &str = "user:read";
pub const USER_UPDATE: &str = "user:update";
pub const USER_DELETE: &str = "user:delete";

pub const CATEGORY_CREATE: &str = "category:create";
pub const CATEGORY_READ: &str = "category:read";
pub const CATEGORY_UPDATE: &str = "category:update";
pub const CATEGORY_DELETE: &str = "category:delete";

pub const ROLE_CREATE: &str = "role:create";
pub const ROLE_READ: &str = "role:read";
pub const ROLE_UPDATE: &str = "role:update";
pub const ROLE_DELETE: &str = "role:delete";

pub const PERMISSIONS_CREATE: &str = "permissions:create";
pub const PERMISSIONS_READ: &str = "permissions:read";
pub const PERMISSIONS_UPDATE: &str = "permissions:update";
pub const PERMISSIONS_DELETE: &str = "permissions:delete";

pub const ROLE_PERMISSIONS_CREATE: &str = "role_permissions:create";
pub const ROLE_PERMISSIONS_READ: &str = "role_permissions:read";
pub const ROLE_PERMISSIONS_UPDATE: &str = "role_permissions:update";
pub const ROLE_PERMISSIONS_DELETE: &str = "role_permissions:delete";

pub const PRODUCT_CREATE: &str = "product:create";
pub const PRODUCT_READ: &str = "product:read";
pub const PRODUCT_UPDATE: &str = "product:update";
pub const PRODUCT_DELETE: &str = "product:delete";
