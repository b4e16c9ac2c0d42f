use crate::tl::{OBJECT_INTERFACE, SecureBytes, SecureString};

tl_object! {
	/// Failure reported in place of a function result.
	TonlibError = "error" {
		code: i32,
		message: String,
	}

	/// Success marker for functions without a payload.
	TonlibOk = "ok" {}

	/// Network configuration.
	Config = "config" {
		config: String,
		blockchain_name: String,
		use_callbacks_for_network: bool,
		ignore_cache: bool,
	}

	/// Library start-up options.
	Options = "options" {
		config: Option<Config>,
		keystore_directory: String,
	}

	/// Stored key handle.
	Key = "key" {
		public_key: String,
		secret: SecureBytes,
	}

	/// Key plus the local password unlocking it.
	InputKey = "inputKey" {
		key: Option<Key>,
		local_password: SecureBytes,
	}

	/// Mnemonic export.
	ExportedKey = "exportedKey" {
		word_list: Vec<SecureString>,
	}

	/// PEM export.
	ExportedPemKey = "exportedPemKey" {
		pem: SecureString,
	}

	/// Password-encrypted export.
	ExportedEncryptedKey = "exportedEncryptedKey" {
		data: SecureBytes,
	}

	/// Mnemonic word completions.
	Bip39Hints = "bip39Hints" {
		words: Vec<String>,
	}

	/// User-friendly account address.
	AccountAddress = "accountAddress" {
		account_address: String,
	}

	/// Account address split into its parts.
	UnpackedAccountAddress = "unpackedAccountAddress" {
		workchain_id: i32,
		bounceable: bool,
		testnet: bool,
		addr: Vec<u8>,
	}

	InternalTransactionId = "internal.transactionId" {
		lt: i64,
		hash: Vec<u8>,
	}

	RawInitialAccountState = "raw.initialAccountState" {
		code: Vec<u8>,
		data: Vec<u8>,
	}

	RawAccountState = "raw.accountState" {
		balance: i64,
		code: Vec<u8>,
		data: Vec<u8>,
		last_transaction_id: Option<InternalTransactionId>,
		sync_utime: i64,
	}

	RawMessage = "raw.message" {
		source: String,
		destination: String,
		value: i64,
		message: Vec<u8>,
	}

	RawTransaction = "raw.transaction" {
		utime: i64,
		data: Vec<u8>,
		transaction_id: Option<InternalTransactionId>,
		fee: i64,
		in_msg: Option<RawMessage>,
		out_msgs: Vec<RawMessage>,
	}

	/// A page of account transactions.
	RawTransactions = "raw.transactions" {
		transactions: Vec<RawTransaction>,
		previous_transaction_id: Option<InternalTransactionId>,
	}

	TestWalletInitialAccountState = "testWallet.initialAccountState" {
		public_key: String,
	}

	TestWalletAccountState = "testWallet.accountState" {
		balance: i64,
		seqno: i32,
		last_transaction_id: Option<InternalTransactionId>,
		sync_utime: i64,
	}

	WalletInitialAccountState = "wallet.initialAccountState" {
		public_key: String,
	}

	WalletAccountState = "wallet.accountState" {
		balance: i64,
		seqno: i32,
		last_transaction_id: Option<InternalTransactionId>,
		sync_utime: i64,
	}

	TestGiverAccountState = "testGiver.accountState" {
		balance: i64,
		seqno: i32,
		last_transaction_id: Option<InternalTransactionId>,
		sync_utime: i64,
	}

	UninitedAccountState = "uninited.accountState" {
		balance: i64,
		last_transaction_id: Option<InternalTransactionId>,
		sync_utime: i64,
	}

	GenericAccountStateRaw = "generic.accountStateRaw" {
		account_state: Option<RawAccountState>,
	}

	GenericAccountStateTestWallet = "generic.accountStateTestWallet" {
		account_state: Option<TestWalletAccountState>,
	}

	GenericAccountStateWallet = "generic.accountStateWallet" {
		account_state: Option<WalletAccountState>,
	}

	GenericAccountStateTestGiver = "generic.accountStateTestGiver" {
		account_state: Option<TestGiverAccountState>,
	}

	GenericAccountStateUninited = "generic.accountStateUninited" {
		account_state: Option<UninitedAccountState>,
	}

	SendGramsResult = "sendGramsResult" {
		sent_until: i64,
	}

	/// Outbound lite-server query the embedder must deliver.
	UpdateSendLiteServerQuery = "updateSendLiteServerQuery" {
		id: i64,
		data: Vec<u8>,
	}

	/// Log to stderr.
	LogStreamDefault = "logStreamDefault" {}

	/// Log to a rotated file.
	LogStreamFile = "logStreamFile" {
		path: String,
		max_file_size: i64,
	}

	/// Discard log output.
	LogStreamEmpty = "logStreamEmpty" {}

	LogVerbosityLevel = "logVerbosityLevel" {
		verbosity_level: i32,
	}

	LogTags = "logTags" {
		tags: Vec<String>,
	}
}

tl_enum! {
	/// Where library log output goes.
	LogStream = "LogStream" => {
		Default(LogStreamDefault),
		File(LogStreamFile),
		Empty(LogStreamEmpty),
	}
}

tl_enum! {
	/// Account state of any known contract kind.
	GenericAccountState = "generic.AccountState" => {
		Raw(GenericAccountStateRaw),
		TestWallet(GenericAccountStateTestWallet),
		Wallet(GenericAccountStateWallet),
		TestGiver(GenericAccountStateTestGiver),
		Uninited(GenericAccountStateUninited),
	}
}

tl_enum! {
	/// Any non-function value.
	Object = OBJECT_INTERFACE => {
		TonlibError(TonlibError),
		TonlibOk(TonlibOk),
		Config(Config),
		Options(Options),
		Key(Key),
		InputKey(InputKey),
		ExportedKey(ExportedKey),
		ExportedPemKey(ExportedPemKey),
		ExportedEncryptedKey(ExportedEncryptedKey),
		Bip39Hints(Bip39Hints),
		AccountAddress(AccountAddress),
		UnpackedAccountAddress(UnpackedAccountAddress),
		InternalTransactionId(InternalTransactionId),
		RawInitialAccountState(RawInitialAccountState),
		RawAccountState(RawAccountState),
		RawMessage(RawMessage),
		RawTransaction(RawTransaction),
		RawTransactions(RawTransactions),
		TestWalletInitialAccountState(TestWalletInitialAccountState),
		TestWalletAccountState(TestWalletAccountState),
		WalletInitialAccountState(WalletInitialAccountState),
		WalletAccountState(WalletAccountState),
		TestGiverAccountState(TestGiverAccountState),
		UninitedAccountState(UninitedAccountState),
		GenericAccountStateRaw(GenericAccountStateRaw),
		GenericAccountStateTestWallet(GenericAccountStateTestWallet),
		GenericAccountStateWallet(GenericAccountStateWallet),
		GenericAccountStateTestGiver(GenericAccountStateTestGiver),
		GenericAccountStateUninited(GenericAccountStateUninited),
		SendGramsResult(SendGramsResult),
		UpdateSendLiteServerQuery(UpdateSendLiteServerQuery),
		LogStreamDefault(LogStreamDefault),
		LogStreamFile(LogStreamFile),
		LogStreamEmpty(LogStreamEmpty),
		LogVerbosityLevel(LogVerbosityLevel),
		LogTags(LogTags),
	}
}
