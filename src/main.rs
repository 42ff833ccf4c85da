use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, scrollable};
use iced::{keyboard, time, window, Element, Length, Size, Subscription, Task, Theme};
use std::time::Duration;

mod cdn;
mod config;
mod error;
mod state;
mod ui;

use config::GalleryConfig;
use error::FetchError;
use state::candidates::ImageId;
use state::columns::GridColumns;
use state::lightbox::NavKey;
use state::loader::{self, GrowthOutcome, PendingGrowth};
use state::viewport::ViewportMetrics;
use state::GalleryState;

/// Interval between smooth-scroll frames
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const GALLERY_SCROLLABLE: &str = "gallery-scrollable";

const WINDOW_SIZE: Size = Size::new(1200.0, 900.0);

/// Main application state
struct Gallery {
    config: GalleryConfig,
    state: GalleryState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The gallery viewport moved or resized
    Scrolled(ViewportMetrics),
    /// A deferred growth's latency elapsed
    GrowthReady(PendingGrowth),
    /// Background fetch finished for one image
    ImageLoaded(ImageId, Result<Handle, FetchError>),
    ColumnsSelected(GridColumns),
    OpenLightbox(usize),
    CloseLightbox,
    Navigate(NavKey),
    ScrollToTop,
    AnimationFrame,
    WindowResized(Size),
    CloseRequested(window::Id),
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let config = GalleryConfig::load();
        let state = GalleryState::new(&config);

        tracing::info!(
            realized = state.loader.len(),
            columns = state.columns.count(),
            cdn = %config.cdn_base,
            "gallery initialized"
        );

        let mut gallery = Gallery { config, state };
        let growth = gallery.state.resize_window(WINDOW_SIZE.height);
        let task = Task::batch([gallery.request_images(), gallery.schedule(growth)]);
        (gallery, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled(metrics) => {
                let growth = self.state.observe_viewport(metrics);
                self.schedule(growth)
            }
            Message::GrowthReady(growth) => match self.state.complete_growth(growth) {
                GrowthOutcome::Grew { from, to } => {
                    tracing::info!(
                        from,
                        to,
                        exhausted = self.state.loader.is_exhausted(),
                        "realized list grew"
                    );
                    let growth = self.state.refresh_sentinel();
                    Task::batch([self.request_images(), self.schedule(growth)])
                }
                GrowthOutcome::Exhausted => {
                    tracing::debug!(
                        requested_at = growth.requested_at(),
                        "all candidates realized, growth is a no-op"
                    );
                    Task::none()
                }
                GrowthOutcome::Abandoned => {
                    tracing::debug!("dropping growth from a torn-down gallery");
                    Task::none()
                }
            },
            Message::ImageLoaded(id, result) => {
                let handle = match result {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        tracing::debug!(%id, error = %e, "image failed to load");
                        None
                    }
                };
                self.state.image_loaded(id, handle);
                Task::none()
            }
            Message::ColumnsSelected(columns) => {
                let growth = self.state.set_columns(columns);
                self.schedule(growth)
            }
            Message::OpenLightbox(index) => {
                self.state.open(index);
                Task::none()
            }
            Message::CloseLightbox => {
                self.state.close();
                Task::none()
            }
            Message::Navigate(key) => {
                self.state.handle_key(key);
                Task::none()
            }
            Message::ScrollToTop => {
                self.state.scroll_to_top();
                Task::none()
            }
            Message::AnimationFrame => match self.state.smooth_scroll.tick() {
                Some(y) => scrollable::scroll_to(
                    scrollable::Id::new(GALLERY_SCROLLABLE),
                    AbsoluteOffset { x: 0.0, y },
                ),
                None => Task::none(),
            },
            Message::WindowResized(size) => {
                let growth = self.state.resize_window(size.height);
                self.schedule(growth)
            }
            Message::CloseRequested(id) => {
                tracing::info!(
                    pending_growths = self.state.loader.in_flight(),
                    "closing gallery"
                );
                self.state.teardown();
                window::close(id)
            }
        }
    }

    /// Run a triggered growth after the configured load latency
    fn schedule(&self, growth: Option<PendingGrowth>) -> Task<Message> {
        match growth {
            Some(growth) => Task::perform(
                loader::defer(growth, self.config.load_delay()),
                Message::GrowthReady,
            ),
            None => Task::none(),
        }
    }

    /// Start fetches for realized images that were never requested
    fn request_images(&mut self) -> Task<Message> {
        let ids = self.state.thumbnails.request(self.state.loader.realized());
        if ids.is_empty() {
            return Task::none();
        }

        tracing::debug!(count = ids.len(), "requesting images");

        let (width, height) = (self.config.image_width, self.config.image_height);
        Task::batch(ids.into_iter().map(|id| {
            let url = cdn::image_url(&self.config.cdn_base, id, width, height);
            Task::perform(cdn::fetch::fetch_image(url), move |result| {
                Message::ImageLoaded(id, result)
            })
        }))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let gallery = scrollable(ui::grid::view(&self.state))
            .id(scrollable::Id::new(GALLERY_SCROLLABLE))
            .on_scroll(|viewport| Message::Scrolled(viewport.into()))
            .width(Length::Fill)
            .height(Length::Fill);

        let page: Element<Message> = column![ui::header::view(self.state.columns), gallery].into();
        let page = ui::with_scroll_top(page, self.state.scroll_top.is_visible());

        ui::lightbox::view(page, &self.state)
    }

    /// Subscriptions live only while their state needs them;
    /// iced drops the listener as soon as one is no longer returned.
    fn subscription(&self) -> Subscription<Message> {
        let keys = if self.state.lightbox.is_open() {
            keyboard::on_key_press(lightbox_key)
        } else {
            Subscription::none()
        };

        let frames = if self.state.smooth_scroll.is_animating() {
            time::every(FRAME_INTERVAL).map(|_| Message::AnimationFrame)
        } else {
            Subscription::none()
        };

        Subscription::batch([
            keys,
            frames,
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            window::close_requests().map(Message::CloseRequested),
        ])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn lightbox_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    ui::lightbox::nav_key(&key).map(Message::Navigate)
}

/// Console logging, filtered by RUST_LOG
fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,image_gallery=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> iced::Result {
    setup_logging();

    iced::application("Image Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window_size(WINDOW_SIZE)
        .exit_on_close_request(false)
        .centered()
        .run_with(Gallery::new)
}
