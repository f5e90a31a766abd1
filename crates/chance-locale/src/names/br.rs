pub const FEMALE: &[&str] = &[
    "Alice", "Amanda", "Ana", "Ana Clara", "Beatriz", "Bianca", "Bruna", "Camila", "Carolina",
    "Cecília", "Clara", "Daniela", "Eduarda", "Elisa", "Fernanda", "Gabriela", "Giovanna",
    "Helena", "Isabela", "Júlia", "Larissa", "Laura", "Letícia", "Lívia", "Lorena", "Luana",
    "Luiza", "Manuela", "Maria", "Maria Eduarda", "Mariana", "Melissa", "Natália", "Raquel",
    "Rafaela", "Sofia", "Valentina", "Vitória", "Yasmin",
];

pub const MALE: &[&str] = &[
    "Arthur", "Benjamin", "Bernardo", "Bruno", "Caio", "Carlos", "Daniel", "Davi", "Diego",
    "Eduardo", "Enzo", "Felipe", "Fernando", "Gabriel", "Guilherme", "Gustavo", "Heitor",
    "Henrique", "Igor", "João", "João Pedro", "Joaquim", "José", "Leonardo", "Lucas", "Luiz",
    "Marcelo", "Matheus", "Miguel", "Murilo", "Nicolas", "Otávio", "Paulo", "Pedro", "Rafael",
    "Ricardo", "Rodrigo", "Samuel", "Thiago", "Vinícius",
];
