use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use service_desk::{AppRoute, AuthMode};

const CATEGORIES: [(&str, &str); 4] = [
    ("Cleaning", "Deep home and kitchen cleaning"),
    ("Electrical", "Wiring, fittings and repairs"),
    ("Plumbing", "Leaks, taps and drainage"),
    ("Appliances", "AC, fridge and washer service"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // 未登录时弹出登录框，登录后再次点击即可前往
    let on_book = move |_| {
        if auth.state.get_untracked().is_authenticated() {
            router.navigate_to_route(AppRoute::Booking);
        } else {
            auth.open_modal(AuthMode::Login);
        }
    };

    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <h1 class="text-5xl font-bold">"Home services, on your schedule"</h1>
                    <p class="py-6 text-base-content/70">
                        "Verified technicians for cleaning, repairs and installations. Pick a slot within the next three days."
                    </p>
                    <button class="btn btn-primary" on:click=on_book>
                        "Book a Service"
                    </button>
                </div>
            </div>
        </div>

        <div class="container mx-auto px-4 py-10">
            <div class="grid gap-4 md:grid-cols-4">
                {CATEGORIES
                    .iter()
                    .map(|(name, blurb)| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h2 class="card-title">{*name}</h2>
                                    <p class="text-sm text-base-content/70">{*blurb}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="text-center mt-10">
                <Link to=AppRoute::TechnicianOnboard class="link link-primary">
                    "Are you a technician? Join us"
                </Link>
            </div>
        </div>
    }
}
