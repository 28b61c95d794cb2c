use crate::api::use_services;
use crate::auth::use_auth;
use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::present::technician::{AvailabilityToggle, TechnicianProfile, toggle_availability};

fn photo_url(name: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(name).into();
    TechnicianProfile::photo_url(&encoded)
}

#[component]
pub fn TechnicianProfilePage() -> impl IntoView {
    let auth = use_auth();
    let services = StoredValue::new(use_services());

    let profile = RwSignal::new(Option::<TechnicianProfile>::None);
    let (loading, set_loading) = signal(true);

    // 用户 ID 由会话恢复写入，缺失时不发请求
    match auth.state.get_untracked().user.and_then(|u| u.id) {
        Some(user_id) => {
            let api = services.get_value().technicians();
            spawn_local(async move {
                match api.by_user(&user_id).await {
                    Ok(detail) => {
                        profile.try_set(Some(TechnicianProfile::from(detail)));
                    }
                    Err(e) => log::error!("[TechnicianProfile] failed to load profile: {}", e),
                }
                set_loading.try_set(false);
            });
        }
        None => {
            log::error!("[TechnicianProfile] no user id in session");
            set_loading.set(false);
        }
    }

    let on_toggle = move |ev: leptos::ev::Event| {
        let now_available = event_target_checked(&ev);
        let Some(current) = profile.get_untracked() else {
            return;
        };
        // 先乐观更新开关
        profile.update(|p| {
            if let Some(p) = p {
                p.is_available = now_available;
            }
        });

        match toggle_availability(&current, now_available) {
            AvailabilityToggle::Revert => {
                log::error!("[TechnicianProfile] cannot update status: technician id missing");
                profile.update(|p| {
                    if let Some(p) = p {
                        p.is_available = !now_available;
                    }
                });
            }
            AvailabilityToggle::Send {
                technician_id,
                status,
            } => {
                let api = services.get_value().technicians();
                spawn_local(async move {
                    match api.update_availability(&technician_id, status).await {
                        Ok(()) => log::info!("[TechnicianProfile] availability set to {:?}", status),
                        Err(e) => {
                            log::error!("[TechnicianProfile] update failed: {}", e);
                            profile.try_update(|p| {
                                if let Some(p) = p {
                                    p.is_available = !now_available;
                                }
                            });
                        }
                    }
                });
            }
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-3xl">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {move || match profile.get() {
                    None => view! {
                        <div role="alert" class="alert alert-warning">
                            <span>"Profile could not be loaded"</span>
                        </div>
                    }
                    .into_any(),
                    Some(p) => view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="flex items-center gap-4">
                                    <div class="avatar">
                                        <div class="w-24 rounded-full">
                                            <img src=photo_url(&p.name) alt=p.name.clone() />
                                        </div>
                                    </div>
                                    <div class="flex-1">
                                        <h1 class="text-2xl font-bold">{p.name.clone()}</h1>
                                        <p class="text-base-content/70">{p.primary_skill.clone()}</p>
                                        <p class="text-sm">{p.phone.clone()} " · " {p.city.clone()}</p>
                                    </div>
                                    <label class="label cursor-pointer gap-2">
                                        <span class="label-text">
                                            {if p.is_available { "Available" } else { "Unavailable" }}
                                        </span>
                                        <input
                                            type="checkbox"
                                            class="toggle toggle-success"
                                            prop:checked=p.is_available
                                            on:change=on_toggle
                                        />
                                    </label>
                                </div>

                                <div class="divider">"Documents"</div>
                                {if p.documents.is_empty() {
                                    view! { <p class="text-base-content/70">"No documents uploaded"</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <table class="table">
                                            <thead>
                                                <tr><th>"Document"</th><th>"ID"</th><th>"Status"</th></tr>
                                            </thead>
                                            <tbody>
                                                {p.documents
                                                    .iter()
                                                    .map(|d| view! {
                                                        <tr>
                                                            <td>{d.name.clone()}</td>
                                                            <td>{d.doc_id.clone()}</td>
                                                            <td>
                                                                <span class="badge badge-success">{d.status.as_str()}</span>
                                                            </td>
                                                        </tr>
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    }
                                    .into_any()
                                }}
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}
