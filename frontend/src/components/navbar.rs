use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use service_desk::AppRoute;
use service_desk::AuthMode;
use service_desk_shared::Role;

/// 按角色显示的导航项
fn links_for(role: Option<Role>) -> &'static [(AppRoute, &'static str)] {
    match role {
        Some(Role::Customer) => &[
            (AppRoute::Booking, "Book a Service"),
            (AppRoute::CustomerBookings, "My Bookings"),
        ],
        Some(Role::Technician) => &[
            (AppRoute::TechnicianDashboard, "Dashboard"),
            (AppRoute::TechnicianProfile, "Profile"),
        ],
        Some(Role::Admin) | Some(Role::ServiceManager) => {
            &[(AppRoute::AdminAssignments, "Assignments")]
        }
        None => &[(AppRoute::TechnicianOnboard, "Become a Technician")],
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_authenticated = auth.is_authenticated_signal();
    let role = auth.role_signal();

    let on_logout = move |_| {
        auth.logout();
        router.navigate_to_route(AppRoute::Home);
    };

    view! {
        <div class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">
                    "Service Desk"
                </Link>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal px-1">
                    {move || {
                        links_for(role.get())
                            .iter()
                            .map(|(route, label)| {
                                view! {
                                    <li>
                                        <Link to=*route>{*label}</Link>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>

                <Show
                    when=move || is_authenticated.get()
                    fallback=move || {
                        view! {
                            <div class="dropdown dropdown-end">
                                <div tabindex="0" role="button" class="btn btn-primary btn-sm">
                                    "Account"
                                </div>
                                <ul
                                    tabindex="0"
                                    class="menu dropdown-content bg-base-100 rounded-box z-10 mt-2 w-40 p-2 shadow"
                                >
                                    <li>
                                        <a on:click=move |_| auth.open_modal(AuthMode::Login)>"Login"</a>
                                    </li>
                                    <li>
                                        <a on:click=move |_| auth.open_modal(AuthMode::Register)>
                                            "Register"
                                        </a>
                                    </li>
                                </ul>
                            </div>
                        }
                    }
                >
                    <span class="badge badge-outline">
                        {move || role.get().map(|r| r.to_string()).unwrap_or_default()}
                    </span>
                    <button class="btn btn-ghost btn-sm" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
