pub const FEMALE: &[&str] = &[
    "Abigail", "Alice", "Amelia", "Anna", "Charlotte", "Chloe", "Elizabeth", "Ella", "Emily",
    "Emma", "Evelyn", "Grace", "Hannah", "Harper", "Isabella", "Jennifer", "Jessica", "Karen",
    "Linda", "Lily", "Madison", "Margaret", "Mary", "Mia", "Nancy", "Olivia", "Patricia",
    "Rachel", "Ruby", "Sarah", "Sophia", "Susan", "Victoria", "Zoe",
];

pub const MALE: &[&str] = &[
    "Alexander", "Andrew", "Anthony", "Benjamin", "Charles", "Christopher", "Daniel", "David",
    "Edward", "Ethan", "George", "Henry", "Jack", "Jacob", "James", "John", "Joseph", "Joshua",
    "Liam", "Mark", "Matthew", "Michael", "Noah", "Oliver", "Paul", "Richard", "Robert", "Samuel",
    "Thomas", "William",
];
