use crate::api::use_services;
use crate::components::notice::{Notice, NoticeBar, flash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::present::TimeSlot;
use service_desk::present::bookings::{
    CANCEL_FAILED, CANCEL_SUCCESS, CustomerBooking, RESCHEDULE_FAILED, RESCHEDULE_SUCCESS,
    StatusFilter, validate_reschedule,
};
use service_desk_shared::BookingStatus;
use service_desk_shared::date::{DateWindow, format_display_date, today};

fn status_badge(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge badge-warning",
        BookingStatus::Confirmed | BookingStatus::Rescheduled => "badge badge-info",
        BookingStatus::InProgress => "badge badge-primary",
        BookingStatus::Completed => "badge badge-success",
        BookingStatus::Cancelled => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    let services = StoredValue::new(use_services());

    let (bookings, set_bookings) = signal(Vec::<CustomerBooking>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(StatusFilter::All);
    let (notice, set_notice) = signal(Notice::None);

    // 弹窗目标
    let (cancel_target, set_cancel_target) = signal(Option::<CustomerBooking>::None);
    let (reschedule_target, set_reschedule_target) = signal(Option::<CustomerBooking>::None);
    let (new_date, set_new_date) = signal(String::new());
    let (new_slot, set_new_slot) = signal(String::new());
    let (reschedule_error, set_reschedule_error) = signal(Option::<&'static str>::None);

    let load_bookings = move || {
        // 操作完成时页面可能已卸载
        let Some(api) = services.try_with_value(|s| s.bookings()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api.my_bookings().await {
                Ok(list) => set_bookings.set(list.into_iter().map(CustomerBooking::from).collect()),
                Err(e) => {
                    log::warn!("[CustomerBookings] {}", e);
                    flash(set_notice, e.user_message_or("Failed to load bookings"), true);
                }
            }
            set_loading.try_set(false);
        });
    };

    // 初始加载
    load_bookings();

    let open_reschedule = move |booking: CustomerBooking| {
        set_new_date.set(String::new());
        set_new_slot.set(String::new());
        set_reschedule_error.set(None);
        set_reschedule_target.set(Some(booking));
    };

    let confirm_cancel = move |_| {
        let Some(booking) = cancel_target.get_untracked() else {
            return;
        };
        set_cancel_target.set(None);
        let api = services.get_value().bookings();
        spawn_local(async move {
            match api.cancel(&booking.id).await {
                Ok(()) => {
                    flash(set_notice, CANCEL_SUCCESS, false);
                    load_bookings();
                }
                Err(e) => {
                    log::warn!("[CustomerBookings] cancel {}: {}", booking.id, e);
                    flash(set_notice, e.user_message_or(CANCEL_FAILED), true);
                }
            }
        });
    };

    let confirm_reschedule = move |_| {
        let Some(booking) = reschedule_target.get_untracked() else {
            return;
        };
        let request = match validate_reschedule(&new_date.get(), &new_slot.get(), today()) {
            Ok(request) => request,
            Err(message) => {
                set_reschedule_error.set(Some(message));
                return;
            }
        };
        set_reschedule_target.set(None);
        let api = services.get_value().bookings();
        spawn_local(async move {
            match api.reschedule(&booking.id, &request).await {
                Ok(()) => {
                    flash(set_notice, RESCHEDULE_SUCCESS, false);
                    load_bookings();
                }
                Err(e) => {
                    log::warn!("[CustomerBookings] reschedule {}: {}", booking.id, e);
                    flash(set_notice, e.user_message_or(RESCHEDULE_FAILED), true);
                }
            }
        });
    };

    let reschedule_window = DateWindow::reschedule(today());

    let booking_card = move |booking: CustomerBooking| {
        let show_actions = booking.should_show_actions();
        let for_cancel = booking.clone();
        let for_reschedule = booking.clone();
        let technician = booking.technician_name.clone().map(|name| {
            let phone = booking.technician_phone.clone().unwrap_or_default();
            view! {
                <p class="text-sm">
                    "Technician: " <span class="font-semibold">{name}</span> " " {phone}
                </p>
            }
        });
        view! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex justify-between items-start">
                        <div>
                            <h2 class="card-title">{booking.service_name.clone()}</h2>
                            <p class="text-sm text-base-content/70">{booking.category.clone()}</p>
                        </div>
                        <span class=status_badge(booking.status)>{booking.status.as_str()}</span>
                    </div>
                    <p class="text-sm">
                        {format_display_date(&booking.scheduled_date)} " · " {booking.time_slot.clone()}
                    </p>
                    <p class="text-sm text-base-content/70">{booking.address.clone()}</p>
                    {technician}
                    <Show when=move || show_actions>
                        <div class="card-actions justify-end">
                            <button
                                class="btn btn-sm btn-outline"
                                disabled=for_reschedule.is_reschedule_disabled()
                                on:click={
                                    let b = for_reschedule.clone();
                                    move |_| open_reschedule(b.clone())
                                }
                            >
                                "Reschedule"
                            </button>
                            <button
                                class="btn btn-sm btn-error btn-outline"
                                disabled=for_cancel.is_cancel_disabled()
                                on:click={
                                    let b = for_cancel.clone();
                                    move |_| set_cancel_target.set(Some(b.clone()))
                                }
                            >
                                "Cancel"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        }
    };

    view! {
        <NoticeBar notice=notice />
        <div class="container mx-auto px-4 py-8">
            <div class="flex flex-wrap justify-between items-center gap-4 mb-6">
                <h1 class="text-3xl font-bold">"My Bookings"</h1>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| set_filter.set(StatusFilter::parse(&event_target_value(&ev)))
                    prop:value=move || filter.get().as_str()
                >
                    <option value="ALL">"All"</option>
                    {BookingStatus::FILTERABLE
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {move || {
                    let all = bookings.get();
                    let visible: Vec<CustomerBooking> =
                        filter.get().apply(&all).into_iter().cloned().collect();
                    if visible.is_empty() {
                        view! { <p class="text-center text-base-content/70 py-16">"No bookings found"</p> }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2">
                                {visible.into_iter().map(booking_card).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </div>

        // 取消确认
        <div class=move || if cancel_target.get().is_some() { "modal modal-open" } else { "modal" }>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Cancel booking?"</h3>
                <p class="py-4">
                    {move || cancel_target.get().map(|b| b.service_name).unwrap_or_default()}
                </p>
                <div class="modal-action">
                    <button class="btn" on:click=move |_| set_cancel_target.set(None)>"Keep"</button>
                    <button class="btn btn-error" on:click=confirm_cancel>"Cancel Booking"</button>
                </div>
            </div>
        </div>

        // 改期
        <div class=move || if reschedule_target.get().is_some() { "modal modal-open" } else { "modal" }>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Reschedule booking"</h3>
                <Show when=move || reschedule_error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2 mt-2">
                        <span>{move || reschedule_error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <div class="form-control mt-2">
                    <label class="label"><span class="label-text">"New date"</span></label>
                    <input
                        type="date"
                        class="input input-bordered"
                        min=reschedule_window.min_str()
                        max=reschedule_window.max_str()
                        on:input=move |ev| set_new_date.set(event_target_value(&ev))
                        prop:value=new_date
                    />
                </div>
                <div class="form-control mt-2">
                    <label class="label"><span class="label-text">"Time slot"</span></label>
                    <select
                        class="select select-bordered"
                        on:change=move |ev| set_new_slot.set(event_target_value(&ev))
                        prop:value=new_slot
                    >
                        <option value="">"Select a slot"</option>
                        {TimeSlot::ALL
                            .iter()
                            .map(|slot| view! { <option value=slot.code()>{slot.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="modal-action">
                    <button class="btn" on:click=move |_| set_reschedule_target.set(None)>"Close"</button>
                    <button class="btn btn-primary" on:click=confirm_reschedule>"Reschedule"</button>
                </div>
            </div>
        </div>
    }
}
