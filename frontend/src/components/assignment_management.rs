use crate::api::use_services;
use crate::components::notice::{Notice, NoticeBar, flash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::present::assignments::{
    ASSIGNMENT_FAILED, ActionType, AssignmentBoard, AssignmentRow, AvailableTechnician, RowStatus,
};
use service_desk::present::slot_label;
use service_desk_shared::date::format_display_date;

#[component]
pub fn AssignmentManagementPage() -> impl IntoView {
    let services = StoredValue::new(use_services());

    let board = RwSignal::new(AssignmentBoard::default());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(Notice::None);

    let load_bookings = move || {
        let Some(api) = services.try_with_value(|s| s.bookings()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api.all().await {
                Ok(bookings) => {
                    board.try_update(|b| b.load(bookings));
                }
                Err(e) => log::error!("[Assignments] failed to load bookings: {}", e),
            }
            set_loading.try_set(false);
        });
    };

    // 初始加载
    load_bookings();

    let on_action = move |booking_id: String| {
        let mut opened = false;
        board.update(|b| opened = b.open_action(&booking_id));
        if !opened {
            return;
        }
        let api = services.get_value().technicians();
        spawn_local(async move {
            let technicians = match api.available().await {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("[Assignments] failed to load technicians: {}", e);
                    Vec::new()
                }
            };
            board.try_update(|b| b.set_technicians(technicians));
        });
    };

    let on_confirm = move |_| {
        let Some(request) = board.with_untracked(|b| b.assignment_request()) else {
            return;
        };
        let api = services.get_value().assignments();
        spawn_local(async move {
            match api.create(&request).await {
                Ok(()) => {
                    board.try_update(|b| b.close());
                    load_bookings();
                }
                Err(e) => {
                    log::error!("[Assignments] assignment failed: {}", e);
                    flash(set_notice, ASSIGNMENT_FAILED, true);
                }
            }
        });
    };

    let row_view = move |row: AssignmentRow| {
        let id = row.booking_id.clone();
        let badge = match row.status {
            RowStatus::Unassigned => "badge badge-warning",
            RowStatus::Completed => "badge badge-success",
        };
        let button = match row.action {
            ActionType::Assign => "btn btn-sm btn-primary",
            ActionType::Reassign => "btn btn-sm btn-outline",
        };
        view! {
            <tr>
                <td class="font-mono text-xs">{row.booking_id.clone()}</td>
                <td>
                    <div class="font-semibold">{row.service_name.clone()}</div>
                    <div class="text-xs text-base-content/70">{row.sub_category.clone()}</div>
                </td>
                <td>
                    <div>{format_display_date(&row.scheduled_date)}</div>
                    <div class="text-xs text-base-content/70">{slot_label(&row.time_slot).into_owned()}</div>
                </td>
                <td><span class=badge>{row.status.as_str()}</span></td>
                <td>
                    <button class=button on:click=move |_| on_action(id.clone())>
                        {row.action.label()}
                    </button>
                </td>
            </tr>
        }
    };

    let technician_option = move |t: AvailableTechnician| {
        let id = t.id.clone();
        let selected_id = t.id.clone();
        let is_selected = move || {
            board.with(|b| b.selected_technician.as_deref() == Some(selected_id.as_str()))
        };
        view! {
            <li>
                <a
                    class=move || if is_selected() { "active" } else { "" }
                    on:click=move |_| board.update(|b| b.select_technician(&id))
                >
                    <div class="avatar">
                        <div class="w-10 rounded-full">
                            <img src=t.avatar.clone() alt=t.name.clone() />
                        </div>
                    </div>
                    <div>
                        <div class="font-semibold">{t.name.clone()}</div>
                        <div class="text-xs opacity-70">{t.skill.clone()}</div>
                    </div>
                    <span class="badge badge-success badge-sm ml-auto">"AVAILABLE"</span>
                </a>
            </li>
        }
    };

    view! {
        <NoticeBar notice=notice />
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6">"Assignment Management"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Booking"</th>
                                <th>"Service"</th>
                                <th>"Schedule"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || board.with(|b| b.rows.clone()).into_iter().map(row_view).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>

        <div class=move || if board.with(|b| b.modal.is_some()) { "modal modal-open" } else { "modal" }>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || match board.with(|b| b.modal) {
                        Some(ActionType::Reassign) => "Reassign Technician",
                        _ => "Assign Technician",
                    }}
                </h3>
                <p class="text-sm text-base-content/70">
                    {move || {
                        board
                            .with(|b| b.selected_booking.as_ref().map(|r| r.service_name.clone()))
                            .unwrap_or_default()
                    }}
                </p>
                <ul class="menu bg-base-200 rounded-box mt-4 max-h-72 overflow-y-auto">
                    {move || {
                        let technicians = board.with(|b| b.technicians.clone());
                        if technicians.is_empty() {
                            view! { <li class="p-4 text-sm opacity-70">"No technicians available"</li> }
                                .into_any()
                        } else {
                            technicians.into_iter().map(technician_option).collect_view().into_any()
                        }
                    }}
                </ul>
                <div class="modal-action">
                    <button class="btn" on:click=move |_| board.update(|b| b.close())>"Cancel"</button>
                    <button
                        class="btn btn-primary"
                        disabled=move || board.with(|b| b.assignment_request().is_none())
                        on:click=on_confirm
                    >
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}
