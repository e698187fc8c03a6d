// SPDX-License-Identifier: MPL-2.0

//! Settings page view for the Swatch application.

use crate::app::{AppModel, Message};
use crate::fl;
use crate::palette::PaletteKind;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget;

/// View for the Settings page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("settings"));

    let selected_palette = PaletteKind::all()
        .iter()
        .position(|palette| *palette == app.config.palette);

    let picker_section = cosmic::widget::settings::section()
        .title(fl!("picker-config"))
        .add(
            cosmic::widget::settings::item::builder(fl!("palette"))
                .description(fl!("palette-description"))
                .control(
                    widget::column::with_capacity(2)
                        .push(
                            widget::dropdown(PaletteKind::labels(), selected_palette, |index| {
                                Message::PaletteSelected(index)
                            })
                            .width(Length::Fixed(200.0)),
                        )
                        .push(widget::text::caption(format!(
                            "{}: {}",
                            fl!("palette-size"),
                            app.config.palette.options().len()
                        )))
                        .spacing(space_s),
                ),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("show-values"))
                .description(fl!("show-values-description"))
                .control(
                    widget::row::with_capacity(2)
                        .push(
                            widget::button::text(fl!("enabled"))
                                .class(if app.config.show_values {
                                    cosmic::theme::Button::Suggested
                                } else {
                                    cosmic::theme::Button::Standard
                                })
                                .on_press(Message::ShowValuesChanged(true)),
                        )
                        .push(
                            widget::button::text(fl!("disabled"))
                                .class(if app.config.show_values {
                                    cosmic::theme::Button::Standard
                                } else {
                                    cosmic::theme::Button::Suggested
                                })
                                .on_press(Message::ShowValuesChanged(false)),
                        )
                        .spacing(space_s)
                        .align_y(Alignment::Center),
                ),
        );

    widget::scrollable(
        widget::column::with_capacity(2)
            .push(header)
            .push(picker_section)
            .spacing(space_m)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
