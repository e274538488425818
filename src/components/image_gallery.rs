//! Photo gallery with arrow navigation and thumbnail selection.

use leptos::prelude::*;

use crate::net::api;

/// Index of the photo after `current`, wrapping at the end.
fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index of the photo before `current`, wrapping at the start.
fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Main photo with prev/next arrows and a thumbnail strip. Renders a
/// placeholder when the product has no photos.
#[component]
pub fn ImageGallery(product_id: i64, photo_ids: Vec<i64>) -> impl IntoView {
    if photo_ids.is_empty() {
        return view! { <div class="gallery gallery--empty">"No image"</div> }.into_any();
    }

    let len = photo_ids.len();
    let index = RwSignal::new(0usize);
    let main_src = {
        let photo_ids = photo_ids.clone();
        move || {
            let i = index.get().min(len - 1);
            api::product_photo_url(product_id, photo_ids[i])
        }
    };

    view! {
        <div class="gallery">
            <div class="gallery__main">
                <img class="gallery__photo" src=main_src alt="Product photo" />
                <Show when=move || (len > 1)>
                    <button
                        class="gallery__arrow gallery__arrow--prev"
                        aria-label="Previous photo"
                        on:click=move |_| index.update(|i| *i = prev_index(*i, len))
                    >
                        "‹"
                    </button>
                    <button
                        class="gallery__arrow gallery__arrow--next"
                        aria-label="Next photo"
                        on:click=move |_| index.update(|i| *i = next_index(*i, len))
                    >
                        "›"
                    </button>
                </Show>
            </div>
            <Show when=move || (len > 1)>
                <div class="gallery__thumbs">
                    {photo_ids
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(i, photo_id)| {
                            view! {
                                <button
                                    class="gallery__thumb"
                                    class:gallery__thumb--active=move || index.get() == i
                                    on:click=move |_| index.set(i)
                                >
                                    <img
                                        src=api::product_photo_url(product_id, photo_id)
                                        alt=format!("Photo {}", i + 1)
                                    />
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[cfg(test)]
#[path = "image_gallery_test.rs"]
mod image_gallery_test;
