//! Capability checks
//!
//! The core decides what a role may do; the presentation layer hiding a
//! button is a courtesy, not the enforcement point. Normal users can view
//! everything and add records; every other mutation is super-admin only.

use cot_model::Role;

/// Operations a subject may need permission for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Create a customer record
    CreateCustomer,
    /// Replace an existing customer record
    UpdateCustomer,
    /// Delete a customer record
    DeleteCustomer,
    /// Delete every customer record
    PurgeCustomers,
    /// Create or delete user accounts
    ManageUsers,
    /// View the admin panel breakdowns
    ViewAdminPanel,
}

impl Capability {
    /// Display string for diagnostics
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CreateCustomer => "create customer",
            Capability::UpdateCustomer => "update customer",
            Capability::DeleteCustomer => "delete customer",
            Capability::PurgeCustomers => "purge customers",
            Capability::ManageUsers => "manage users",
            Capability::ViewAdminPanel => "view admin panel",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a role holds a capability
#[inline]
#[must_use]
pub fn allows(role: Role, capability: Capability) -> bool {
    match role {
        Role::SuperAdmin => true,
        Role::NormalUser => matches!(capability, Capability::CreateCustomer),
    }
}
