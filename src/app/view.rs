// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is a scrollable list of containers, each drawn from its last
//! layout pass as fixed-size columns. While the lightbox is visible it is
//! stacked on top and made opaque, which also stops the gallery from
//! receiving wheel events.

use super::Message;
use crate::gallery::{Gallery, GalleryContainer, LightboxButton, MediaItem, MediaKind};
use crate::lightbox::LightboxController;
use crate::masonry::{ContainerId, ContainerLayout, LayoutPass, MasonryController};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, column, container, image, opaque, scrollable, text, Column, Container, Row, Stack,
};
use iced::{ContentFit, Element, Length};
use std::path::PathBuf;

/// Outer padding of the gallery page.
pub const PAGE_PADDING: f32 = spacing::MD;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub masonry: &'a MasonryController,
    pub container_ids: &'a [ContainerId],
    pub lightbox: &'a LightboxController<PathBuf>,
    pub overlay_opacity: f32,
    pub image_opacity: f32,
    pub config_warning: Option<&'a str>,
}

/// Renders the gallery and, when visible, the lightbox above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = view_gallery(&ctx);

    if !ctx.lightbox.is_visible() {
        return page;
    }

    Stack::new()
        .push(page)
        .push(opaque(view_lightbox(&ctx)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gap = ctx.masonry.balancer().gap().value();
    let mut sections = Column::new().spacing(spacing::LG).padding(PAGE_PADDING);

    if let Some(warning) = ctx.config_warning {
        sections = sections.push(
            container(text(format!("Settings ignored: {warning}")).size(typography::BODY))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::error_banner),
        );
    }

    for (index, gallery_container) in ctx.gallery.containers().iter().enumerate() {
        let layout = ctx
            .container_ids
            .get(index)
            .and_then(|id| ctx.masonry.layout(*id));
        sections = sections.push(view_container(index, gallery_container, layout, gap));
    }

    scrollable(sections)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_container<'a>(
    index: usize,
    gallery_container: &'a GalleryContainer,
    layout: Option<&'a ContainerLayout>,
    gap: f32,
) -> Element<'a, Message> {
    let caption = container(text(gallery_container.title()).size(typography::TITLE_SM))
        .style(styles::container::caption);

    let body: Element<'a, Message> = if let Some(error) = gallery_container.error() {
        container(text(error.to_string()).size(typography::BODY))
            .padding(spacing::SM)
            .style(styles::container::error_banner)
            .into()
    } else {
        match layout {
            None => text(format!("Loading {} items…", gallery_container.len()))
                .size(typography::CAPTION)
                .into(),
            Some(_) if gallery_container.is_empty() => {
                text("No images or videos").size(typography::CAPTION).into()
            }
            Some(layout) => view_columns(index, gallery_container, layout, gap),
        }
    };

    column![caption, body].spacing(spacing::XS).into()
}

fn view_columns<'a>(
    container_index: usize,
    gallery_container: &'a GalleryContainer,
    layout: &'a ContainerLayout,
    gap: f32,
) -> Element<'a, Message> {
    let pass = &layout.pass;
    let item_width = (pass.column_width - gap).max(0.0);

    let columns = pass.columns().into_iter().map(|indices| {
        let tiles = indices.into_iter().filter_map(|item_index| {
            let item = gallery_container.item(item_index)?;
            let placement = pass.placements.get(item_index)?;
            Some(view_tile(
                container_index,
                item_index,
                item,
                placement.width,
                placement.height,
            ))
        });
        Column::with_children(tiles)
            .spacing(gap)
            .width(Length::Fixed(item_width))
            .into()
    });

    Row::with_children(columns)
        .spacing(gap)
        .height(Length::Fixed(section_height(pass)))
        .into()
}

/// Height applied to a laid-out section: the tallest column, trailing gap included.
fn section_height(pass: &LayoutPass) -> f32 {
    pass.height
}

fn view_tile<'a>(
    container_index: usize,
    index: usize,
    item: &'a MediaItem,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match item.kind() {
        MediaKind::Image => button(
            image(image::Handle::from_path(item.path()))
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover),
        )
        .padding(0)
        .style(styles::button::tile)
        .on_press(Message::ItemClicked {
            container: container_index,
            index,
        })
        .into(),
        MediaKind::Video => container(
            text(format!("▶ {}", item.display_name())).size(typography::CAPTION),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::video_tile)
        .into(),
    }
}

fn view_lightbox<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let fade = ctx.overlay_opacity;

    let picture: Element<'a, Message> = match ctx.lightbox.displayed_source() {
        Some(source) => image(image::Handle::from_path(source))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .opacity(ctx.image_opacity * fade)
            .into(),
        None => text("").into(),
    };

    let stage = Container::new(picture)
        .padding([spacing::LG, sizing::NAV_BUTTON + spacing::MD * 2.0])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop(fade));

    let counter = ctx
        .lightbox
        .view()
        .position
        .map(|(index, len)| format!("{} / {}", index + 1, len))
        .unwrap_or_default();

    Stack::new()
        .push(stage)
        .push(place(
            nav_button("×", LightboxButton::Close, fade),
            Horizontal::Right,
            Vertical::Top,
        ))
        .push(place(
            nav_button("‹", LightboxButton::Previous, fade),
            Horizontal::Left,
            Vertical::Center,
        ))
        .push(place(
            nav_button("›", LightboxButton::Next, fade),
            Horizontal::Right,
            Vertical::Center,
        ))
        .push(place(
            text(counter)
                .size(typography::CAPTION)
                .color(iced::Color {
                    a: fade,
                    ..palette::GRAY_200
                })
                .into(),
            Horizontal::Center,
            Vertical::Bottom,
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn nav_button<'a>(glyph: &'a str, action: LightboxButton, fade: f32) -> Element<'a, Message> {
    button(
        text(glyph)
            .size(typography::GLYPH)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .padding(0)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        fade,
    ))
    .on_press(Message::Button(action))
    .into()
}

/// Full-size transparent layer holding `content` at one edge.
fn place<'a>(
    content: Element<'a, Message>,
    horizontal: Horizontal,
    vertical: Vertical,
) -> Element<'a, Message> {
    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .into()
}
