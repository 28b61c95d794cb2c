mod form_state;

use self::form_state::FormState;
use crate::api::use_services;
use crate::components::notice::{Notice, NoticeBar, flash};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::AppRoute;
use service_desk::present::TimeSlot;
use service_desk_shared::ServiceCatalogItem;
use service_desk_shared::date::{DateWindow, today};
use service_desk::validation::FieldErrors;

const BOOKING_CREATED: &str = "Booking created successfully";
const BOOKING_FAILED: &str = "Failed to create booking";

/// 字段下方的错误提示
fn field_error(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.get().get(field).map(|msg| {
            let msg = msg.to_string();
            view! { <span class="label-text-alt text-error">{msg}</span> }
        })
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let router = use_router();
    let services = StoredValue::new(use_services());

    let form = FormState::new();
    let (catalog, set_catalog) = signal(Vec::<ServiceCatalogItem>::new());
    let (loading_catalog, set_loading_catalog) = signal(true);
    let (errors, set_errors) = signal(FieldErrors::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Notice::None);

    let window = DateWindow::booking(today());

    // 初始加载服务目录
    let api = services.get_value().catalog();
    spawn_local(async move {
        match api.services().await {
            Ok(items) => set_catalog.set(items),
            Err(e) => {
                log::warn!("[Booking] {}", e);
                flash(set_notice, e.user_message_or("Failed to load services"), true);
            }
        }
        set_loading_catalog.set(false);
    });

    let on_service_change = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        match catalog.get_untracked().iter().find(|s| s.name == name) {
            Some(service) => form.select_service(service),
            None => {
                form.service_name.set(String::new());
                form.category_name.set(String::new());
            }
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match form.to_form().validate(today()) {
            Ok(request) => request,
            Err(field_errors) => {
                set_errors.set(field_errors);
                return;
            }
        };
        set_errors.set(FieldErrors::new());
        set_is_submitting.set(true);

        let api = services.get_value().bookings();
        spawn_local(async move {
            match api.create(&request).await {
                Ok(()) => {
                    log::info!("[Booking] {}", BOOKING_CREATED);
                    form.reset();
                    router.navigate_to_route(AppRoute::CustomerBookings);
                }
                Err(e) => {
                    log::warn!("[Booking] {}", e);
                    flash(set_notice, e.user_message_or(BOOKING_FAILED), true);
                }
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <NoticeBar notice=notice />
        <div class="container mx-auto px-4 py-8 max-w-3xl">
            <h1 class="text-3xl font-bold mb-6">"Book a Service"</h1>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body grid gap-4 md:grid-cols-2" on:submit=on_submit>
                    <div class="form-control md:col-span-2">
                        <label class="label">
                            <span class="label-text">"Service"</span>
                            {field_error(errors, "service_name")}
                        </label>
                        <select
                            class="select select-bordered"
                            disabled=move || loading_catalog.get()
                            on:change=on_service_change
                            prop:value=form.service_name
                        >
                            <option value="">"Select a service"</option>
                            {move || {
                                catalog
                                    .get()
                                    .into_iter()
                                    .map(|s| {
                                        let label = match &s.category_name {
                                            Some(category) => format!("{} ({})", s.name, category),
                                            None => s.name.clone(),
                                        };
                                        view! { <option value=s.name>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Date"</span>
                            {field_error(errors, "scheduled_date")}
                        </label>
                        <input
                            type="date"
                            class="input input-bordered"
                            min=window.min_str()
                            max=window.max_str()
                            on:input=move |ev| form.scheduled_date.set(event_target_value(&ev))
                            prop:value=form.scheduled_date
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Time slot"</span>
                            {field_error(errors, "time_slot")}
                        </label>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| form.time_slot.set(event_target_value(&ev))
                            prop:value=form.time_slot
                        >
                            <option value="">"Select a slot"</option>
                            {TimeSlot::ALL
                                .iter()
                                .map(|slot| view! { <option value=slot.code()>{slot.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-control md:col-span-2">
                        <label class="label">
                            <span class="label-text">"Address"</span>
                            {field_error(errors, "address_line1")}
                        </label>
                        <input
                            type="text"
                            class="input input-bordered"
                            placeholder="House no, street"
                            on:input=move |ev| form.address_line1.set(event_target_value(&ev))
                            prop:value=form.address_line1
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"City"</span>
                            {field_error(errors, "city")}
                        </label>
                        <input
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| form.city.set(event_target_value(&ev))
                            prop:value=form.city
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"State"</span>
                            {field_error(errors, "state")}
                        </label>
                        <input
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| form.state.set(event_target_value(&ev))
                            prop:value=form.state
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Zip code"</span>
                            {field_error(errors, "zip_code")}
                        </label>
                        <input
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| form.zip_code.set(event_target_value(&ev))
                            prop:value=form.zip_code
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Payment"</span>
                            {field_error(errors, "payment_mode")}
                        </label>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| form.payment_mode.set(event_target_value(&ev))
                            prop:value=form.payment_mode
                        >
                            <option value="CASH">"Cash"</option>
                            <option value="ONLINE">"Online"</option>
                        </select>
                    </div>

                    <div class="form-control md:col-span-2">
                        <label class="label">
                            <span class="label-text">"Describe the issue"</span>
                            {field_error(errors, "issue_description")}
                        </label>
                        <textarea
                            class="textarea textarea-bordered h-24"
                            on:input=move |ev| form.issue_description.set(event_target_value(&ev))
                            prop:value=form.issue_description
                        ></textarea>
                    </div>

                    <div class="form-control md:col-span-2 mt-2">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Booking..." }.into_any()
                            } else {
                                "Confirm Booking".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
