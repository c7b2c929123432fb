// Database schema for the select shop
diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        email -> Text,
    }
}

diesel::table! {
    folders (id) {
        id -> Integer,
        user_id -> Integer,        // Owner; (user_id, name) is unique
        name -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    products (id) {
        id -> Integer,
        user_id -> Integer,
        title -> Text,
        image -> Text,
        link -> Text,
        lprice -> Integer,         // Lowest listed price
        myprice -> Integer,        // Target price, 0 when unset
        created_at -> Timestamp,
    }
}

diesel::table! {
    folder_products (id) {
        id -> Integer,
        folder_id -> Integer,
        product_id -> Integer,
    }
}

diesel::joinable!(folders -> users (user_id));
diesel::joinable!(products -> users (user_id));
diesel::joinable!(folder_products -> folders (folder_id));
diesel::joinable!(folder_products -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(users, folders, products, folder_products,);
