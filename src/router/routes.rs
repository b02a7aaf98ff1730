//! Static route table and per-route access requirements.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Who may visit a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only signed-out visitors (login, register).
    GuestOnly,
    Authenticated,
    /// Signed-in administrators. Implies `Authenticated`.
    Admin,
}

impl Access {
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Authenticated | Self::Admin)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Register,
    Dashboard,
    ApiKeys,
    AiProviderKeys,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
    pub access: Access,
}

/// Every routed page, in declaration order.
pub static ROUTES: [RouteDescriptor; 5] = [
    RouteDescriptor {
        path: "/login",
        name: RouteName::Login,
        access: Access::GuestOnly,
    },
    RouteDescriptor {
        path: "/register",
        name: RouteName::Register,
        access: Access::GuestOnly,
    },
    RouteDescriptor {
        path: "/dashboard",
        name: RouteName::Dashboard,
        access: Access::Authenticated,
    },
    RouteDescriptor {
        path: "/api-keys",
        name: RouteName::ApiKeys,
        access: Access::Authenticated,
    },
    RouteDescriptor {
        path: "/admin/ai-provider-keys",
        name: RouteName::AiProviderKeys,
        access: Access::Admin,
    },
];

/// Default landing route for signed-in users; `/` and unknown paths land here too.
pub const LANDING: RouteName = RouteName::Dashboard;

impl RouteName {
    pub fn descriptor(self) -> &'static RouteDescriptor {
        let index = match self {
            Self::Login => 0,
            Self::Register => 1,
            Self::Dashboard => 2,
            Self::ApiKeys => 3,
            Self::AiProviderKeys => 4,
        };
        &ROUTES[index]
    }

    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::ApiKeys => "api-keys",
            Self::AiProviderKeys => "ai-provider-keys",
        }
    }
}
