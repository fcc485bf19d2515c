use leptos::prelude::*;

use crate::content::{NAV_ITEMS, OWNER};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="fixed top-0 w-full bg-black/70 backdrop-blur-xl z-50 border-b border-white/10">
            <nav class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
                <h1 class="text-xl font-bold tracking-wide">{OWNER}</h1>
                <ul class="hidden md:flex gap-8 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a href=item.href() class="hover:text-indigo-400 transition">
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
