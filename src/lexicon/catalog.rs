//! # Phrase Catalogs
//!
//! Centralizes every user-facing phrase the bot can produce: greetings,
//! farewells, moods, advice, jokes, facts, the slang dictionary and the
//! regional expression table. Keeping the data in one place makes wording
//! updates and review easy.

/// One entry of the slang dictionary. Keys are lowercase and unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlangEntry {
    pub word: &'static str,
    pub meaning: &'static str,
    pub description: &'static str,
}

/// Fixed answer for empty or whitespace-only messages. Never randomized.
pub const EMPTY_PROMPT: &str =
    "¿Parce? No escuché nada. Escríbeme algo y hablamos, ¡de una!";

/// Sent to the user when something breaks outside the bot's control.
pub const FALLBACK_REPLY: &str = "¡Uy! Algo salió mal. Dame un momento y vuelvo.";

/// `{name}` is replaced with the configured bot name.
pub const GREETINGS: &[&str] = &[
    "¡Quiubo parce! ¿Cómo va todo?",
    "¡Ajá! ¿Qué más? Aquí {name} listo para ayudarte",
    "¡Buenas! ¿Cómo estás? Aquí tu pana {name}",
    "¡Hola! ¿Qué hubo? Cuéntame todo",
    "¡Ey, qué más pues! Por aquí {name}, a la orden",
    "¡Hola hola! Qué gusto saludarte, ¿cómo amaneciste?",
];

pub const GREETING_FOLLOW_UPS: &[&str] = &[
    "¿Y qué me cuentas de nuevo?",
    "¿Cómo va ese día?",
    "¿Todo bien por allá?",
    "¿En qué te puedo colaborar hoy?",
];

pub const FAREWELLS: &[&str] = &[
    "¡Chao! Que te vaya muy bien, parce",
    "Nos vemos, ¡cuídate mucho!",
    "¡Hasta luego! Cualquier cosa aquí estoy",
    "¡Vamos! Que tengas un día chimba",
    "¡Chao pues! Aquí quedo pendiente",
    "¡Que estés muy bien! Vuelve cuando quieras",
];

pub const FAREWELL_WISHES: &[&str] = &[
    "¡Y que todo te salga bacano!",
    "¡Saludos a la familia!",
    "¡No te me pierdas!",
    "¡Éxitos en todo!",
];

pub const POSITIVE_RESPONSES: &[&str] = &[
    "¡Claro que sí, mi hermano!",
    "¡A la orden! Para eso estamos",
    "¡Listo! Todo quedó más chimba",
    "¡Perfecto! Quedó excelente",
    "¡De una, parce!",
];

pub const ENCOURAGEMENTS: &[&str] = &[
    "¡Ánimo parce, que tú puedes con eso y más!",
    "Tranquilo, que después de la tormenta sale el sol. ¡Pa'lante!",
    "¡No te me achicopales! Mañana será otro día mejor",
    "Eso le pasa a cualquiera, lo importante es levantarse. ¡Berraquera!",
    "Respira profundo, tómate un tinto y verás que todo mejora",
    "¡Usted es más berraco que las dificultades, no lo olvide!",
];

pub const REINFORCEMENTS: &[&str] = &[
    "Y recuerda: el que es berraco no se vara.",
    "Aquí estoy para lo que necesites, ¿oyó?",
    "¡Vamos con toda!",
    "Paso a paso se llega lejos, parce.",
];

pub const SURPRISE_RESPONSES: &[&str] = &[
    "¡No me digas! ¡Qué cosa tan increíble!",
    "¡Uy, qué nota! Eso sí no me lo esperaba",
    "¿En serio? ¡Eso está muy berraco!",
    "¡Avemaría! Me dejaste con la boca abierta",
    "¡Qué chimba de noticia, parce!",
];

pub const AGREEMENT_RESPONSES: &[&str] = &[
    "¡Exacto, parce! Así mismo es",
    "¡Claro que sí! Estamos en la misma página",
    "Totalmente de acuerdo, ni más faltaba",
    "¡Eso es! Usted sí sabe",
    "¡De una! Pensamos igualito",
];

pub const DISAGREEMENT_RESPONSES: &[&str] = &[
    "Mmm, yo lo veo distinto, parce, pero respeto tu opinión",
    "No estoy tan seguro de eso, ¿de dónde lo sacaste?",
    "Uy no, ahí sí no te acompaño, mi hermano",
    "Déjame dudarlo tantico... no me convence",
    "Puede ser, pero yo no le apostaría a eso",
];

pub const ADVICE_PHRASES: &[&str] = &[
    "Mi consejo: consúltalo con la almohada antes de decidir",
    "Haz una lista de pros y contras, eso nunca falla",
    "Escucha tu corazón, pero llévate la cabeza de copiloto",
    "No tomes decisiones grandes con el estómago vacío ni con rabia",
    "Pregúntale a alguien que ya haya pasado por eso, la experiencia vale oro",
    "A veces la mejor decisión es no decidir todavía, date tiempo",
    "Lo barato sale caro, parce, piénsalo dos veces",
    "El que mucho abarca poco aprieta: empieza por una sola cosa",
];

pub const PERSONALITY_TRAITS: &[&str] = &[
    "soy pura sabrosura colombiana: alegre, parlanchín y siempre dispuesto a ayudar",
    "me crié entre tintos, vallenato y buena conversa, así que de charlar sé un montón",
    "soy el parcero digital que nunca está de mal genio",
    "tengo el corazón paisa, el humor costeño y la cortesía rola",
];

pub const RANDOM_FACTS: &[&str] = &[
    "Colombia es el país con más especies de aves en el mundo: ¡más de 1900!",
    "El Carnaval de Barranquilla es Patrimonio Cultural Inmaterial de la Humanidad",
    "Caño Cristales es conocido como el río de los cinco colores",
    "Colombia es el primer productor mundial de esmeraldas",
    "La palabra 'quiubo' viene de '¿qué hubo?', por si te lo preguntabas",
    "A Medellín le dicen la ciudad de la eterna primavera por su clima",
    "Gabriel García Márquez ganó el Nobel de Literatura en 1982",
    "El café colombiano se cultiva en más de 590 municipios del país",
    "Colombia tiene costas en dos océanos: el Pacífico y el Atlántico",
    "La orquídea Cattleya trianae es la flor nacional de Colombia",
];

pub const FACT_FOLLOW_UPS: &[&str] = &[
    "¿Quieres otro dato? Solo pídemelo.",
    "¡Colombia es una chimba, sí o no!",
    "Ese me lo sé de memoria, parce.",
];

pub const JOKES: &[&str] = &[
    "¿Qué le dijo un semáforo a otro? No me mires que me estoy cambiando",
    "¿Cómo se despiden los químicos? Ácido un placer",
    "¿Qué hace una abeja en el gimnasio? ¡Zum-ba!",
    "Mi jefe me dijo que le diera lo mejor de mí... y le di la espalda",
    "¿Qué le dijo una pared a otra pared? Nos vemos en la esquina",
    "Estaba tan enguayabado que el guayabo tenía guayabo",
    "¿Por qué el libro de matemáticas estaba triste? Porque tenía muchos problemas",
    "¿Qué le dice un tinto a otro tinto? ¡Qué molido estoy, parce!",
];

pub const JOKE_TAGS: &[&str] = &[
    "Jajaja, ese nunca falla.",
    "¿Muy malo? Tengo peores.",
    "Me lo contó un taxista en Medellín.",
];

/// Default-strategy answers for messages no strategy understood.
pub const CONFUSED_RESPONSES: &[&str] = &[
    "¡Vea! No entendí bien eso, ¿me lo explicas de nuevo?",
    "¿Cómo dice, mi hermano? No capté bien eso",
    "¡Uy! Creo que no te entendí. ¿Me lo repites?",
    "¿Perdón? No pude entender eso. Cuéntame de nuevo, ¡vamos!",
    "Se me enredó el casete, parce. ¿Me lo dices con otras palabras?",
];

/// Colloquial tags the flavor pass may append to any reply.
pub const FLAVOR_TAGS: &[&str] = &["¿Me entiendes?", "¡Vea!", "¡O sea!", "¿Sí o qué?"];

/// Colombian slang dictionary: word -> (meaning, description).
pub const SLANG: &[SlangEntry] = &[
    SlangEntry {
        word: "parce",
        meaning: "amigo/compañero",
        description: "La forma más paisa de decirle a un amigo cercano",
    },
    SlangEntry {
        word: "parcero",
        meaning: "amigo del alma",
        description: "Versión larga de 'parce', con más cariño todavía",
    },
    SlangEntry {
        word: "chévere",
        meaning: "genial/excelente",
        description: "Lo usamos para casi todo lo que nos gusta",
    },
    SlangEntry {
        word: "bacano",
        meaning: "bueno/agradable",
        description: "Algo o alguien que cae muy bien",
    },
    SlangEntry {
        word: "chimba",
        meaning: "muy bueno/increíble",
        description: "Cuando algo está mejor que bueno; ojo, depende del tono",
    },
    SlangEntry {
        word: "rumba",
        meaning: "fiesta",
        description: "Donde hay música, baile y amanecida",
    },
    SlangEntry {
        word: "guayabo",
        meaning: "resaca",
        description: "Lo que queda el día después de la rumba",
    },
    SlangEntry {
        word: "enguayabado",
        meaning: "con resaca",
        description: "Estado oficial del día después de la rumba",
    },
    SlangEntry {
        word: "jíbaro",
        meaning: "astuto/listo",
        description: "Alguien que se las sabe todas",
    },
    SlangEntry {
        word: "camello",
        meaning: "trabajo",
        description: "El que toca hacer para pagar las cuentas",
    },
    SlangEntry {
        word: "camellar",
        meaning: "trabajar duro",
        description: "Echarle ganas al camello",
    },
    SlangEntry {
        word: "tinto",
        meaning: "café negro",
        description: "El combustible oficial de Colombia, se ofrece a toda hora",
    },
    SlangEntry {
        word: "pola",
        meaning: "cerveza",
        description: "En honor a La Pola, heroína de la independencia",
    },
    SlangEntry {
        word: "guaro",
        meaning: "aguardiente",
        description: "El trago insignia, con anís y buena conversación",
    },
    SlangEntry {
        word: "berraco",
        meaning: "valiente/tenaz",
        description: "Alguien que no se rinde; también alguien muy capaz",
    },
    SlangEntry {
        word: "berraquera",
        meaning: "coraje/cosa excelente",
        description: "Dependiendo del contexto: valentía o algo buenísimo",
    },
    SlangEntry {
        word: "vaina",
        meaning: "cosa/asunto",
        description: "Comodín universal cuando no recordamos el nombre de algo",
    },
    SlangEntry {
        word: "parche",
        meaning: "grupo de amigos/plan",
        description: "El combo con el que uno sale, o el plan mismo",
    },
    SlangEntry {
        word: "desparchado",
        meaning: "aburrido, sin plan",
        description: "Cuando no hay parche ni nada que hacer",
    },
    SlangEntry {
        word: "quiubo",
        meaning: "hola, ¿qué hubo?",
        description: "Saludo rápido entre conocidos",
    },
    SlangEntry {
        word: "ñapa",
        meaning: "extra de regalo",
        description: "Lo que uno pide de más en la tienda, por encima de lo pagado",
    },
    SlangEntry {
        word: "lucas",
        meaning: "miles de pesos",
        description: "Veinte lucas son veinte mil pesos",
    },
    SlangEntry {
        word: "chino",
        meaning: "niño/muchacho",
        description: "Así les dicen a los muchachos en Bogotá",
    },
    SlangEntry {
        word: "sardino",
        meaning: "joven/adolescente",
        description: "Alguien con poca edad o que la aparenta",
    },
    SlangEntry {
        word: "jartera",
        meaning: "pereza/aburrimiento",
        description: "Lo que da un trancón un lunes por la mañana",
    },
    SlangEntry {
        word: "embarrarla",
        meaning: "cometer un error",
        description: "Cuando algo sale mal por culpa de uno",
    },
    SlangEntry {
        word: "amañado",
        meaning: "a gusto en un lugar",
        description: "Cuando un sitio lo recibe a uno tan bien que no se quiere ir",
    },
];

/// Regional expression table. Consumed flattened: region labels only matter
/// for the data's organization, selection is across all regions.
pub const REGIONAL_EXPRESSIONS: &[(&str, &[&str])] = &[
    (
        "paisa",
        &[
            "¡Eh, Avemaría!",
            "¡Hágale pues!",
            "¡Qué chimba, pues!",
            "¡Pues claro, hombre!",
            "¡Qué berraquera!",
        ],
    ),
    (
        "rolo",
        &[
            "¿Sí o no?",
            "¡Qué boleta!",
            "¡Qué oso!",
            "Ala, ¿en serio?",
            "¡Paila!",
        ],
    ),
    (
        "costeño",
        &[
            "¡Ajá, y entonces!",
            "¡No joda!",
            "¡Erda, mani!",
            "¡Qué nota e' vaina!",
            "¡Eche, claro!",
        ],
    ),
    (
        "valluno",
        &[
            "¡Ve, mirá!",
            "¿Oís?",
            "¡Qué bacanería, ve!",
            "¡Borondo pues!",
            "¡Ombe sí!",
        ],
    ),
];
