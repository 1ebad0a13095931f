use crate::book::{Book, BookId, Category};
use crate::catalog::catalog::Catalog;

#[allow(clippy::too_many_arguments)]
fn book(
    id: u32,
    title: &str,
    author: &str,
    category: Category,
    price: f64,
    description: &str,
    cover: &str,
    featured: bool,
    rating: f64,
) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: author.to_string(),
        category,
        price,
        description: description.to_string(),
        cover: cover.to_string(),
        featured,
        rating,
    }
}

/// The stock inventory the storefront ships with.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        book(
            1,
            "The Midnight Library",
            "Matt Haig",
            Category::Fiction,
            16.99,
            "Between life and death there is a library, and within that library, the shelves go on forever. Every book provides a chance to try another life you could have lived.",
            "📚",
            true,
            4.8,
        ),
        book(
            2,
            "Educated",
            "Tara Westover",
            Category::Nonfiction,
            18.99,
            "A memoir about a young woman who, kept out of school, leaves her survivalist family and goes on to earn a PhD from Cambridge University.",
            "📖",
            true,
            4.9,
        ),
        book(
            3,
            "Project Hail Mary",
            "Andy Weir",
            Category::SciFi,
            15.99,
            "A lone astronaut must save the earth from disaster in this incredible new science-based thriller from the author of The Martian.",
            "🚀",
            true,
            4.7,
        ),
        book(
            4,
            "The Silent Patient",
            "Alex Michaelides",
            Category::Mystery,
            14.99,
            "Alicia Berenson's life is seemingly perfect. Then one evening, she shoots her husband and never speaks another word.",
            "🕵️",
            false,
            4.5,
        ),
        book(
            5,
            "Atomic Habits",
            "James Clear",
            Category::Nonfiction,
            17.99,
            "An easy and proven way to build good habits and break bad ones with tiny changes that deliver remarkable results.",
            "⚡",
            false,
            4.8,
        ),
        book(
            6,
            "The House in the Cerulean Sea",
            "TJ Klune",
            Category::SciFi,
            16.99,
            "A magical island. An orphanage. Six dangerous children. A journey that will change one caseworker's life forever.",
            "🏰",
            false,
            4.6,
        ),
        book(
            7,
            "Where the Crawdads Sing",
            "Delia Owens",
            Category::Fiction,
            18.99,
            "For years, rumors of the 'Marsh Girl' have haunted Barkley Cove. She's a beautiful, mysterious outcast who raised herself in the marshes.",
            "🦋",
            false,
            4.7,
        ),
        book(
            8,
            "The Thursday Murder Club",
            "Richard Osman",
            Category::Mystery,
            15.99,
            "Four unlikely friends meet weekly to investigate unsolved murders in a peaceful retirement village.",
            "🔍",
            false,
            4.6,
        ),
        book(
            9,
            "Sapiens",
            "Yuval Noah Harari",
            Category::Nonfiction,
            19.99,
            "A brief history of humankind, exploring how Homo sapiens came to dominate the world.",
            "🌍",
            false,
            4.8,
        ),
        book(
            10,
            "The Invisible Life of Addie LaRue",
            "V.E. Schwab",
            Category::Fiction,
            17.99,
            "A woman makes a Faustian bargain to live forever but is cursed to be forgotten by everyone she meets.",
            "⏳",
            false,
            4.5,
        ),
        book(
            11,
            "Dune",
            "Frank Herbert",
            Category::SciFi,
            20.99,
            "Set on the desert planet Arrakis, Dune is the story of Paul Atreides and his journey toward a destiny greater than he could ever have imagined.",
            "🏜️",
            false,
            4.9,
        ),
        book(
            12,
            "The Seven Husbands of Evelyn Hugo",
            "Taylor Jenkins Reid",
            Category::Fiction,
            16.99,
            "Aging Hollywood icon Evelyn Hugo finally tells the truth about her glamorous and scandalous life.",
            "🌟",
            false,
            4.7,
        ),
        book(
            13,
            "The Maid",
            "Nita Prose",
            Category::Mystery,
            15.99,
            "A charmingly eccentric hotel maid discovers a guest murdered in his bed, turning her world upside down.",
            "🏨",
            false,
            4.4,
        ),
        book(
            14,
            "Thinking, Fast and Slow",
            "Daniel Kahneman",
            Category::Nonfiction,
            18.99,
            "A groundbreaking exploration of the two systems that drive the way we think and make choices.",
            "🧠",
            false,
            4.6,
        ),
        book(
            15,
            "The Starless Sea",
            "Erin Morgenstern",
            Category::Fiction,
            17.99,
            "A love letter to stories and storytelling itself, painted upon a mythic canvas.",
            "🌊",
            false,
            4.3,
        ),
        book(
            16,
            "Circe",
            "Madeline Miller",
            Category::Fiction,
            16.99,
            "In the house of Helios, god of the sun, a daughter is born. But Circe is a strange child—not powerful, like her father, nor viciously alluring like her mother.",
            "🏺",
            false,
            4.8,
        ),
        book(
            17,
            "The Body Keeps the Score",
            "Bessel van der Kolk",
            Category::Nonfiction,
            19.99,
            "A pioneering researcher transforms our understanding of trauma and offers a bold new paradigm for healing.",
            "💚",
            false,
            4.7,
        ),
        book(
            18,
            "Ready Player One",
            "Ernest Cline",
            Category::SciFi,
            16.99,
            "In the year 2045, reality is an ugly place. The only time Wade Watts really feels alive is when he's jacked into the OASIS.",
            "🎮",
            false,
            4.5,
        ),
    ])
}
