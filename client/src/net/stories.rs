//! Static story catalogue served at `/story/:story_id`.

#[cfg(test)]
#[path = "stories_test.rs"]
mod stories_test;

use crate::error::DashboardError;

/// A published article. `body` is Markdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub body: &'static str,
}

const STORIES: &[Story] = &[
    Story {
        id: "kala-utsav-2024",
        title: "Kala Utsav 2024",
        description: "Join us for the biggest cultural festival of the year featuring artists from across India.",
        date: "March 15, 2024",
        read_time: "5 min read",
        author: "Kala Connect Team",
        category: "Events",
        image: "/images/kala-utsav-2024.svg",
        body: "The annual Kala Utsav festival brings together the most talented artists from across India for a \
spectacular celebration of culture, art, and creativity.

## A Celebration of Diversity

This year's festival promises to be our biggest yet, featuring over 200 artists across multiple disciplines \
including traditional dance, contemporary music, visual arts, and theatre.

## Featured Performances

Attendees can expect mesmerizing performances from renowned classical dancers, soulful musical renditions by \
emerging artists, and thought-provoking art installations by contemporary creators.

## Join the Community

Kala Utsav is more than just a festival. It's a platform for artists to connect, collaborate, and inspire each \
other. Whether you're a performer, creator, or art enthusiast, there is a place for you.",
    },
    Story {
        id: "emerging-artists-spotlight",
        title: "Emerging Artists Spotlight",
        description: "Discover the next generation of creative talent making waves in the art world.",
        date: "March 10, 2024",
        read_time: "4 min read",
        author: "Sarah Mitchell",
        category: "Artists",
        image: "/images/placeholder.svg",
        body: "The art world is constantly evolving, and today's emerging artists are pushing boundaries like \
never before.

## Innovation in Art

From digital installations to sustainable art practices, emerging artists are redefining what it means to \
create in the modern world. Their fresh perspectives and innovative techniques are reshaping audiences' \
expectations.

## Platform for Growth

Kala Connect is proud to provide a platform where these talented individuals can showcase their work, connect \
with potential clients, and build their artistic careers.",
    },
    Story {
        id: "digital-art-revolution",
        title: "The Digital Art Revolution",
        description: "How technology is transforming the way we create and experience art in the modern age.",
        date: "March 5, 2024",
        read_time: "6 min read",
        author: "Tech Arts Team",
        category: "Technology",
        image: "/images/placeholder.svg",
        body: "The intersection of technology and art has opened up unprecedented possibilities for creative \
expression.

## New Mediums, New Possibilities

Virtual reality experiences, AI-generated art, and interactive digital installations are just the beginning. \
Artists are leveraging cutting-edge technology to create immersive experiences.

## Accessibility and Reach

Digital platforms have democratized art creation and distribution, allowing artists from all backgrounds to \
reach global audiences.",
    },
];

/// Every catalogued story, newest first.
#[must_use]
pub fn all_stories() -> &'static [Story] {
    STORIES
}

/// Look up a story by its slug.
///
/// # Errors
///
/// Returns [`DashboardError::StoryNotFound`] when no story has that slug.
pub fn find_story(id: &str) -> Result<&'static Story, DashboardError> {
    STORIES
        .iter()
        .find(|story| story.id == id)
        .ok_or_else(|| DashboardError::StoryNotFound(id.to_owned()))
}

/// Path of the story page for `id`.
#[must_use]
pub fn story_href(id: &str) -> String {
    format!("/story/{id}")
}
