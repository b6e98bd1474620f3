//! Draws viewable objects into a terminal window.

use crate::clock::Clock;
use crate::post::{Post, Posts};
use crate::summary;
use colored::Colorize;

/// View renderer options.
#[derive(Debug, Default)]
pub struct ViewOptions {
    color: bool,
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use coven::view::ViewOptions;
    /// let opts = ViewOptions::build().color(true).build();
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }

    /// True if links should be painted in color.
    pub fn color(&self) -> bool {
        self.color
    }

    fn link(&self, text: &str) -> String {
        if self.color {
            text.truecolor(6, 69, 173).to_string()
        } else {
            text.to_string()
        }
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct ViewOptionsBuilder {
    color: bool,
}

impl ViewOptionsBuilder {
    /// Sets the "color" option to true or false.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        ViewOptions { color: self.color }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    ///
    /// `clock` is used to describe how long ago things happened.
    fn view<C: Clock>(&self, opts: &ViewOptions, clock: &C) -> Result<String, summary::Error>;
}

impl Viewable for Post {
    fn view<C: Clock>(&self, opts: &ViewOptions, clock: &C) -> Result<String, summary::Error> {
        Ok(format!(
            "{}:\n\tarticle: {}\n\tcomments({}): {}",
            self.summary(clock)?,
            opts.link(self.url()),
            self.comment_count(),
            opts.link(self.comments()),
        ))
    }
}

impl Viewable for Posts {
    fn view<C: Clock>(&self, opts: &ViewOptions, clock: &C) -> Result<String, summary::Error> {
        let views = self
            .iter()
            .map(|post| post.view(opts, clock))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(views.join("\n\n"))
    }
}
